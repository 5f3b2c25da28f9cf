//! Page renderer
//!
//! Turns the content store into the two page views (home and post detail)
//! and renders them to HTML. Everything here is a pure function of the
//! store, so renders may run concurrently against a shared store.

use std::sync::Arc;

use serde::Serialize;
use tera::Context;

use crate::config::SiteConfig;
use crate::content::{ContentStore, MarkdownRenderer, Post};
use crate::error::RenderError;
use crate::helpers::{self, Category};
use crate::templates::{HomeView, PostCard, PostView, SiteData, TemplateRenderer, TopicData};

/// Topics listed after the three categories in the sidebar
const EXTRA_TOPICS: [&str; 3] = ["JavaScript", "React", "UX"];

/// One valid value of the detail route's `slug` parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticParam {
    pub slug: String,
}

/// Renders pages from a content store
pub struct PageRenderer {
    config: SiteConfig,
    store: Arc<dyn ContentStore>,
    templates: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl PageRenderer {
    /// Create a renderer over `store`
    pub fn new(config: SiteConfig, store: Arc<dyn ContentStore>) -> Result<Self, RenderError> {
        let templates = TemplateRenderer::new()?;
        let markdown = MarkdownRenderer::with_theme(&config.highlight_theme);

        Ok(Self {
            config,
            store,
            templates,
            markdown,
        })
    }

    /// Every detail route identifier, in collection order
    pub fn static_params(&self) -> Vec<StaticParam> {
        self.store
            .list_posts()
            .into_iter()
            .map(|post| StaticParam { slug: post.slug })
            .collect()
    }

    /// Build the home page view
    pub fn home_view(&self) -> HomeView {
        let posts = self.store.list_posts();
        let mut posts = posts.iter();

        let featured = posts.next().map(|post| {
            let image = helpers::image_or_placeholder(
                post.frontmatter.featured_image.as_deref(),
                1200,
                600,
                "featured blog post",
            );
            self.card(post, 0, image)
        });

        let latest = posts
            .map(|post| {
                let image = helpers::image_or_placeholder(
                    post.frontmatter.featured_image.as_deref(),
                    600,
                    400,
                    &format!("blog post about {}", post.frontmatter.title),
                );
                self.card(post, self.config.excerpt_length, image)
            })
            .collect();

        HomeView {
            featured,
            latest,
            topics: topics(),
        }
    }

    /// Build the detail view for `slug`
    pub fn post_view(&self, slug: &str) -> Result<PostView, RenderError> {
        let post = self
            .store
            .get_post_by_slug(slug)
            .ok_or_else(|| RenderError::NotFound(slug.to_string()))?;

        let all_posts = self.store.list_posts();
        let related = helpers::related_posts(&all_posts, slug, self.config.related_posts)
            .into_iter()
            .map(|related| {
                let image = helpers::image_or_placeholder(
                    related.frontmatter.featured_image.as_deref(),
                    500,
                    300,
                    &related.frontmatter.title,
                );
                self.card(related, self.config.excerpt_length, image)
            })
            .collect();

        let image = helpers::image_or_placeholder(
            post.frontmatter.featured_image.as_deref(),
            1200,
            600,
            &post.frontmatter.title,
        );

        Ok(PostView {
            body: self.markdown.render(&post.content),
            post: self.card(&post, 0, image),
            related,
        })
    }

    /// Render the home page
    pub fn render_home(&self) -> Result<String, RenderError> {
        let mut context = self.base_context();
        context.insert("home", &self.home_view());
        Ok(self.templates.render("index.html", &context)?)
    }

    /// Render the detail page, or `RenderError::NotFound`
    pub fn render_post(&self, slug: &str) -> Result<String, RenderError> {
        let view = self.post_view(slug)?;
        let mut context = self.base_context();
        context.insert("page", &view);
        Ok(self.templates.render("post.html", &context)?)
    }

    /// Render the page shown for unknown routes
    pub fn render_not_found(&self) -> Result<String, RenderError> {
        let context = self.base_context();
        Ok(self.templates.render("404.html", &context)?)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("site", &self.site_data());
        context
    }

    fn site_data(&self) -> SiteData {
        SiteData {
            title: self.config.title.clone(),
            description: self.config.description.clone(),
            language: self.config.language.clone(),
            home_url: helpers::url_for(&self.config, "/"),
        }
    }

    fn card(&self, post: &Post, excerpt_length: usize, image: String) -> PostCard {
        let fm = &post.frontmatter;
        PostCard {
            slug: post.slug.clone(),
            url: helpers::post_url(&self.config, &post.slug),
            title: fm.title.clone(),
            author: fm.author.clone(),
            date: fm.date.clone(),
            excerpt: helpers::truncate_chars(&fm.excerpt, excerpt_length),
            image,
            avatar: helpers::avatar_url(&fm.author),
            category: post.category().into(),
        }
    }
}

fn topics() -> Vec<TopicData> {
    let categories = Category::ALL.iter().map(|c| TopicData {
        name: c.name().to_string(),
        class: c.css_class().to_string(),
    });
    let extra = EXTRA_TOPICS.iter().map(|name| TopicData {
        name: name.to_string(),
        class: "topic-muted".to_string(),
    });
    categories.chain(extra).collect()
}
