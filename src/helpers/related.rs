//! Related post selection

use crate::content::Post;

/// Pick up to `limit` posts other than `current`, in collection order
pub fn related_posts<'a>(posts: &'a [Post], current: &str, limit: usize) -> Vec<&'a Post> {
    posts
        .iter()
        .filter(|p| p.slug != current)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;
    use crate::content::ContentStore;

    #[test]
    fn test_excludes_current_post() {
        let posts = MemoryStore::builtin().unwrap().list_posts();
        for post in &posts {
            let related = related_posts(&posts, &post.slug, 2);
            assert_eq!(related.len(), 2);
            assert!(related.iter().all(|p| p.slug != post.slug));
        }
    }

    #[test]
    fn test_keeps_collection_order() {
        let posts = MemoryStore::builtin().unwrap().list_posts();
        let related = related_posts(&posts, "mastering-css-grid-layout", 2);
        let slugs: Vec<_> = related.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["getting-started-with-next-js", "improving-website-performance"]
        );
    }

    #[test]
    fn test_fewer_when_not_enough() {
        let posts = MemoryStore::builtin().unwrap().list_posts();
        assert_eq!(related_posts(&posts[..2], &posts[0].slug, 2).len(), 1);
        assert!(related_posts(&posts[..1], &posts[0].slug, 2).is_empty());
        assert_eq!(related_posts(&posts, "unknown", 2).len(), 2);
    }
}
