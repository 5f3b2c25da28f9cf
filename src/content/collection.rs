//! Validated, insertion-ordered post collection

use indexmap::IndexMap;

use super::Post;
use crate::error::ContentError;

/// An immutable set of posts keyed by slug, in declaration order
#[derive(Debug, Clone, Default)]
pub struct PostCollection {
    posts: IndexMap<String, Post>,
}

impl PostCollection {
    /// Build a collection, rejecting invalid posts and duplicate slugs
    pub fn new(posts: Vec<Post>) -> Result<Self, ContentError> {
        let mut map = IndexMap::with_capacity(posts.len());

        for post in posts {
            post.validate()?;
            if map.contains_key(&post.slug) {
                return Err(ContentError::DuplicateSlug(post.slug));
            }
            map.insert(post.slug.clone(), post);
        }

        Ok(Self { posts: map })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }

    pub fn get(&self, slug: &str) -> Option<&Post> {
        self.posts.get(slug)
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.posts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}
