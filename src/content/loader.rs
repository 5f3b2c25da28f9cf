//! File-backed content store - loads posts from a directory of Markdown files

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use super::frontmatter::FileFrontMatter;
use super::{ContentStore, Post, PostCollection};
use crate::error::ContentError;

/// Store backed by `*.md` files with YAML front-matter
#[derive(Debug, Clone)]
pub struct FileStore {
    posts: PostCollection,
}

impl FileStore {
    /// Load every post under `dir`, newest first
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, ContentError> {
        let dir = dir.as_ref().to_path_buf();
        if !dir.exists() {
            tracing::warn!("Posts directory {:?} does not exist", dir);
            return Ok(Self {
                posts: PostCollection::default(),
            });
        }

        let mut posts = Vec::new();

        for entry in WalkDir::new(&dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match load_post(path) {
                Ok(post) => {
                    tracing::debug!("Loaded post {} from {:?}", post.slug, path);
                    posts.push(post);
                }
                Err(e @ ContentError::FrontMatter { .. }) => {
                    tracing::warn!("Skipping {:?}: {}", path, e);
                }
                Err(e) => return Err(e),
            }
        }

        // Sort by date descending (newest first), slug breaks ties
        posts.sort_by(|a, b| {
            b.published_on()
                .cmp(&a.published_on())
                .then_with(|| a.slug.cmp(&b.slug))
        });

        let posts = PostCollection::new(posts)?;
        Ok(Self { posts })
    }
}

impl ContentStore for FileStore {
    fn list_posts(&self) -> Vec<Post> {
        self.posts.list_posts()
    }

    fn get_post_by_slug(&self, slug: &str) -> Option<Post> {
        self.posts.get_post_by_slug(slug)
    }
}

/// Load a single post from a file
fn load_post(path: &Path) -> Result<Post, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let (fm, body) =
        FileFrontMatter::parse(&content).map_err(|message| ContentError::FrontMatter {
            path: path.to_path_buf(),
            message,
        })?;

    // Slug from front-matter, else from the file name
    let slug = fm.slug.unwrap_or_else(|| {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        slug::slugify(stem)
    });

    Ok(Post::new(slug, fm.meta, body))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_post(dir: &Path, file: &str, extra: &str, date: &str) {
        let content = format!(
            "---\n{}title: Post {}\ndate: {}\nauthor: Jane Smith\nexcerpt: About {}\n---\n\n# Body of {}\n",
            extra, file, date, file, file
        );
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_load_posts_newest_first() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "Older Post.md", "", "2023-01-01");
        write_post(tmp.path(), "newer-post.md", "", "2023-06-01");
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();

        let store = FileStore::load(tmp.path()).unwrap();
        let slugs: Vec<_> = store.list_posts().into_iter().map(|p| p.slug).collect();
        assert_eq!(slugs, vec!["newer-post", "older-post"]);

        let post = store.get_post_by_slug("older-post").unwrap();
        assert_eq!(post.frontmatter.title, "Post Older Post.md");
        assert!(post.content.contains("# Body of Older Post.md"));
    }

    #[test]
    fn test_front_matter_slug_override() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "whatever.md", "slug: css-tips\n", "2023-01-01");

        let store = FileStore::load(tmp.path()).unwrap();
        assert!(store.get_post_by_slug("whatever").is_none());
        assert!(store.get_post_by_slug("css-tips").is_some());
    }

    #[test]
    fn test_nested_directories() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("2023").join("spring");
        fs::create_dir_all(&nested).unwrap();
        write_post(&nested, "deep-post.md", "", "2023-04-01");

        let store = FileStore::load(tmp.path()).unwrap();
        assert!(store.get_post_by_slug("deep-post").is_some());
    }

    #[test]
    fn test_duplicate_slugs_rejected() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.md", "slug: same\n", "2023-01-01");
        write_post(tmp.path(), "b.md", "slug: same\n", "2023-02-01");

        let err = FileStore::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::DuplicateSlug(s) if s == "same"));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "a.md", "", "not-a-date");

        let err = FileStore::load(tmp.path()).unwrap_err();
        assert!(matches!(err, ContentError::InvalidDate { .. }));
    }

    #[test]
    fn test_unparseable_file_skipped() {
        let tmp = TempDir::new().unwrap();
        write_post(tmp.path(), "good.md", "", "2023-01-01");
        fs::write(tmp.path().join("broken.md"), "no front-matter here").unwrap();

        let store = FileStore::load(tmp.path()).unwrap();
        assert_eq!(store.list_posts().len(), 1);
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        let store = FileStore::load(tmp.path().join("nope")).unwrap();
        assert!(store.list_posts().is_empty());
    }
}
