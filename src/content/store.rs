//! Content stores
//!
//! A [`ContentStore`] answers two queries over a fixed post collection:
//! list everything, or look one post up by slug. Stores are built once at
//! start-up and never mutated afterwards, so they can be shared freely
//! between request handlers.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use super::{FileStore, Frontmatter, Post, PostCollection};
use crate::config::{ContentSource, SiteConfig};
use crate::error::ContentError;

/// Read-only access to the post collection
pub trait ContentStore: Send + Sync {
    /// All posts in collection order
    fn list_posts(&self) -> Vec<Post>;

    /// The post with exactly this slug, if any
    fn get_post_by_slug(&self, slug: &str) -> Option<Post>;
}

impl ContentStore for PostCollection {
    fn list_posts(&self) -> Vec<Post> {
        self.iter().cloned().collect()
    }

    fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        self.get(slug).cloned()
    }
}

/// Store backed by records held in memory
#[derive(Debug, Clone)]
pub struct MemoryStore {
    posts: PostCollection,
}

impl MemoryStore {
    pub fn new(posts: Vec<Post>) -> Result<Self, ContentError> {
        Ok(Self {
            posts: PostCollection::new(posts)?,
        })
    }

    /// Store holding the built-in sample posts
    pub fn builtin() -> Result<Self, ContentError> {
        Self::new(builtin_posts())
    }
}

impl ContentStore for MemoryStore {
    fn list_posts(&self) -> Vec<Post> {
        self.posts.list_posts()
    }

    fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.get_post_by_slug(slug)
    }
}

/// Open the store selected by the site configuration
pub fn open_store(config: &SiteConfig, base_dir: &Path) -> Result<Arc<dyn ContentStore>> {
    let store: Arc<dyn ContentStore> = match config.content.source {
        ContentSource::Memory => Arc::new(MemoryStore::builtin()?),
        ContentSource::Files => {
            let posts_dir = base_dir.join(&config.content.posts_dir);
            Arc::new(FileStore::load(&posts_dir)?)
        }
    };

    tracing::info!(
        "Opened {:?} content store with {} posts",
        config.content.source,
        store.list_posts().len()
    );

    Ok(store)
}

const PLACEHOLDER_BODY: &str = "# Full content would go here";

fn builtin_post(
    slug: &str,
    title: &str,
    date: &str,
    author: &str,
    excerpt: &str,
    image: &str,
) -> Post {
    Post::new(
        slug,
        Frontmatter {
            title: title.to_string(),
            date: date.to_string(),
            author: author.to_string(),
            excerpt: excerpt.to_string(),
            featured_image: Some(image.to_string()),
            category: None,
        },
        PLACEHOLDER_BODY,
    )
}

/// The sample posts shipped with the binary
pub fn builtin_posts() -> Vec<Post> {
    vec![
        builtin_post(
            "getting-started-with-next-js",
            "Getting Started with Next.js",
            "2023-04-15",
            "Jane Smith",
            "Next.js is a powerful React framework that makes building fast, SEO-friendly \
             websites easier than ever. In this guide, we'll explore the basics of Next.js \
             and how it can transform your development workflow.",
            "/nextjs-code-in-focus.png",
        ),
        builtin_post(
            "mastering-css-grid-layout",
            "Mastering CSS Grid Layout",
            "2023-03-22",
            "Alex Johnson",
            "CSS Grid has revolutionized web layout design. Learn how to create complex, \
             responsive layouts with this powerful CSS feature that's now supported in all \
             modern browsers.",
            "/css-grid-visualization.png",
        ),
        builtin_post(
            "improving-website-performance",
            "Improving Website Performance",
            "2023-02-10",
            "Mike Chen",
            "Website performance directly impacts user experience and conversion rates. \
             Discover practical techniques to optimize your site speed, from image \
             optimization to code splitting and caching strategies.",
            "/website-speed-optimization-flowchart.png",
        ),
    ]
}
