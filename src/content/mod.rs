//! Content module - post model and the stores that serve it

mod collection;
mod frontmatter;
mod loader;
mod markdown;
mod post;
mod store;

pub use collection::PostCollection;
pub use frontmatter::FileFrontMatter;
pub use loader::FileStore;
pub use markdown::MarkdownRenderer;
pub use post::{is_valid_slug, Frontmatter, Post};
pub use store::{builtin_posts, open_store, ContentStore, MemoryStore};
