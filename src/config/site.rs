//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,

    // URL
    pub root: String,
    pub blog_dir: String,

    // Directory
    pub public_dir: String,
    pub static_dir: String,

    // Rendering
    pub excerpt_length: usize,
    pub related_posts: usize,
    pub highlight_theme: String,

    // Content source
    #[serde(default)]
    pub content: ContentConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "The Editorial".to_string(),
            description: "A modern blog".to_string(),
            language: "en".to_string(),

            root: "/".to_string(),
            blog_dir: "blog".to_string(),

            public_dir: "public".to_string(),
            static_dir: "static".to_string(),

            excerpt_length: 160,
            related_posts: 2,
            highlight_theme: "base16-ocean.dark".to_string(),

            content: ContentConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }
}

/// Where posts come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentSource {
    /// Built-in records compiled into the binary
    Memory,
    /// Markdown files with YAML front-matter
    Files,
}

/// Content store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    pub source: ContentSource,
    pub posts_dir: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            source: ContentSource::Memory,
            posts_dir: "posts".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "The Editorial");
        assert_eq!(config.related_posts, 2);
        assert_eq!(config.content.source, ContentSource::Memory);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
related_posts: 3
content:
  source: files
  posts_dir: articles
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.related_posts, 3);
        assert_eq!(config.excerpt_length, 160);
        assert_eq!(config.content.source, ContentSource::Files);
        assert_eq!(config.content.posts_dir, "articles");
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let yaml = "content:\n  source: database\n";
        assert!(serde_yaml::from_str::<SiteConfig>(yaml).is_err());
    }
}
