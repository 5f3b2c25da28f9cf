//! Error types shared by the content store and the page renderer

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a post collection
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("duplicate slug: {0}")]
    DuplicateSlug(String),

    #[error("invalid slug {0:?}: expected lowercase letters, digits and single hyphens")]
    InvalidSlug(String),

    #[error("post {slug}: missing {field}")]
    MissingField { slug: String, field: &'static str },

    #[error("post {slug}: unparseable date {date:?}")]
    InvalidDate { slug: String, date: String },

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid front-matter in {path:?}: {message}")]
    FrontMatter { path: PathBuf, message: String },
}

/// Outcome of a page render that did not produce HTML
#[derive(Debug, Error)]
pub enum RenderError {
    /// The requested post does not exist
    #[error("post not found: {0}")]
    NotFound(String),

    #[error("template error: {0}")]
    Template(#[from] tera::Error),
}

impl RenderError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RenderError::NotFound(_))
    }
}
