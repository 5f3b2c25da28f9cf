//! Post model

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::helpers::{self, Category};

lazy_static! {
    static ref SLUG_RE: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

/// Metadata block of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frontmatter {
    pub title: String,

    /// Publication date (`YYYY-MM-DD`)
    pub date: String,

    pub author: String,

    pub excerpt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,

    /// Explicit category; when absent it is derived from the slug
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// URL-safe unique identifier
    pub slug: String,

    pub frontmatter: Frontmatter,

    /// Raw body (Markdown)
    pub content: String,
}

impl Post {
    pub fn new(slug: impl Into<String>, frontmatter: Frontmatter, content: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            frontmatter,
            content: content.into(),
        }
    }

    /// Display category: the explicit one, else the slug heuristic
    pub fn category(&self) -> Category {
        self.frontmatter
            .category
            .unwrap_or_else(|| helpers::category_of(&self.slug))
    }

    /// Parsed publication date
    pub fn published_on(&self) -> Option<NaiveDate> {
        helpers::parse_date(&self.frontmatter.date)
    }

    /// Check the per-post invariants
    pub fn validate(&self) -> Result<(), ContentError> {
        if !is_valid_slug(&self.slug) {
            return Err(ContentError::InvalidSlug(self.slug.clone()));
        }

        let fm = &self.frontmatter;
        let required = [
            ("title", &fm.title),
            ("date", &fm.date),
            ("author", &fm.author),
            ("excerpt", &fm.excerpt),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ContentError::MissingField {
                    slug: self.slug.clone(),
                    field,
                });
            }
        }

        if self.published_on().is_none() {
            return Err(ContentError::InvalidDate {
                slug: self.slug.clone(),
                date: fm.date.clone(),
            });
        }

        Ok(())
    }
}

/// Whether `slug` is a lowercase, hyphen-separated URL token
pub fn is_valid_slug(slug: &str) -> bool {
    SLUG_RE.is_match(slug)
}

#[cfg(test)]
pub(crate) fn sample_post(slug: &str) -> Post {
    Post::new(
        slug,
        Frontmatter {
            title: "Title".to_string(),
            date: "2024-01-15".to_string(),
            author: "Author".to_string(),
            excerpt: "Excerpt".to_string(),
            featured_image: None,
            category: None,
        },
        "Body",
    )
}
