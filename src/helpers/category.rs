//! Display categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display category of a post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[serde(alias = "Development")]
    Development,
    #[serde(alias = "Design")]
    Design,
    #[serde(alias = "Performance")]
    Performance,
}

impl Category {
    /// All categories in sidebar order
    pub const ALL: [Category; 3] = [
        Category::Development,
        Category::Design,
        Category::Performance,
    ];

    /// Human-readable label
    pub fn name(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Design => "Design",
            Category::Performance => "Performance",
        }
    }

    /// CSS class of the category badge
    pub fn css_class(&self) -> &'static str {
        match self {
            Category::Development => "category-development",
            Category::Design => "category-design",
            Category::Performance => "category-performance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derive a category from keywords embedded in a slug.
///
/// Keywords are checked in a fixed order, so a slug containing both
/// "next-js" and "css" is Development.
pub fn category_of(slug: &str) -> Category {
    if slug.contains("next-js") {
        Category::Development
    } else if slug.contains("css") {
        Category::Design
    } else if slug.contains("performance") {
        Category::Performance
    } else {
        Category::Development
    }
}
