//! editorial: a server-rendered blog front-end
//!
//! Posts come from a [`content::ContentStore`] chosen at start-up (built-in
//! records or a directory of Markdown files). The [`pages::PageRenderer`]
//! turns them into a home page and per-post detail pages, which are either
//! served over HTTP or pre-rendered to a public directory.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod pages;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

/// The main application
#[derive(Clone)]
pub struct Editorial {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
    /// Static asset directory
    pub static_dir: std::path::PathBuf,
}

impl Editorial {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let public_dir = base_dir.join(&config.public_dir);
        let static_dir = base_dir.join(&config.static_dir);

        Ok(Self {
            config,
            base_dir,
            public_dir,
            static_dir,
        })
    }

    /// Open the configured content store
    pub fn open_store(&self) -> Result<Arc<dyn content::ContentStore>> {
        content::open_store(&self.config, &self.base_dir)
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let tmp = TempDir::new().unwrap();
        let app = Editorial::new(tmp.path()).unwrap();
        assert_eq!(app.config.title, "The Editorial");
        assert_eq!(app.public_dir, tmp.path().join("public"));
        assert_eq!(app.open_store().unwrap().list_posts().len(), 3);
    }

    #[test]
    fn test_reads_config_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "title: Field Notes\npublic_dir: dist\n",
        )
        .unwrap();
        let app = Editorial::new(tmp.path()).unwrap();
        assert_eq!(app.config.title, "Field Notes");
        assert_eq!(app.public_dir, tmp.path().join("dist"));
    }

    #[test]
    fn test_bad_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("_config.yml"), "related_posts: many\n").unwrap();
        assert!(Editorial::new(tmp.path()).is_err());
    }
}
