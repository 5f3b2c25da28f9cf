//! Built-in page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary.

use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::helpers;

/// Template renderer with the embedded editorial theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> tera::Result<Self> {
        // Autoescaping stays on for .html; rendered post bodies opt out with `safe`.
        // Tera's default escaper also rewrites '/', which mangles URLs.
        let mut tera = Tera::default();
        tera.set_escape_fn(helpers::escape_html);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("editorial/layout.html")),
            ("index.html", include_str!("editorial/index.html")),
            ("post.html", include_str!("editorial/post.html")),
            ("404.html", include_str!("editorial/404.html")),
            // Partials
            (
                "partials/header.html",
                include_str!("editorial/partials/header.html"),
            ),
            (
                "partials/byline.html",
                include_str!("editorial/partials/byline.html"),
            ),
            (
                "partials/newsletter.html",
                include_str!("editorial/partials/newsletter.html"),
            ),
        ])?;

        // Register custom filters
        tera.register_filter("date_long", date_long_filter);
        tera.register_filter("date_short", date_short_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }
}

/// Tera filter: "2023-04-15" -> "April 15, 2023"
fn date_long_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_long", "value", String, value);
    Ok(tera::Value::String(helpers::format_long(&s)))
}

/// Tera filter: "2023-04-15" -> "Apr 15, 2023"
fn date_short_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let s = tera::try_get_value!("date_short", "value", String, value);
    Ok(tera::Value::String(helpers::format_short(&s)))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub description: String,
    pub language: String,
    pub home_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryData {
    pub name: String,
    pub class: String,
}

impl From<helpers::Category> for CategoryData {
    fn from(category: helpers::Category) -> Self {
        Self {
            name: category.name().to_string(),
            class: category.css_class().to_string(),
        }
    }
}

/// A post as shown on a card, hero or detail header
#[derive(Debug, Clone, Serialize)]
pub struct PostCard {
    pub slug: String,
    pub url: String,
    pub title: String,
    pub author: String,
    /// Raw `YYYY-MM-DD` date; templates format it
    pub date: String,
    pub excerpt: String,
    pub image: String,
    pub avatar: String,
    pub category: CategoryData,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicData {
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    /// First post of the collection, shown as the hero
    pub featured: Option<PostCard>,
    pub latest: Vec<PostCard>,
    pub topics: Vec<TopicData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub post: PostCard,
    /// Rendered body HTML
    pub body: String,
    pub related: Vec<PostCard>,
}
