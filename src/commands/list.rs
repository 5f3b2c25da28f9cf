//! List site content

use anyhow::Result;
use indexmap::IndexMap;

use crate::helpers::{self, Category};
use crate::pages::PageRenderer;
use crate::Editorial;

/// List site content by type
pub fn run(app: &Editorial, content_type: &str) -> Result<()> {
    let store = app.open_store()?;

    match content_type {
        "post" | "posts" => {
            let posts = store.list_posts();
            println!("Posts ({}):", posts.len());
            for post in posts {
                println!(
                    "  {} - {} by {} [{}]",
                    post.frontmatter.date, post.frontmatter.title, post.frontmatter.author, post.slug
                );
            }
        }
        "route" | "routes" => {
            let renderer = PageRenderer::new(app.config.clone(), store)?;
            let params = renderer.static_params();
            println!("Routes ({}):", params.len() + 1);
            println!("  {}", helpers::url_for(&app.config, "/"));
            for param in params {
                println!("  {}", helpers::post_url(&app.config, &param.slug));
            }
        }
        "category" | "categories" => {
            let posts = store.list_posts();
            let mut categories: IndexMap<Category, usize> =
                Category::ALL.iter().map(|c| (*c, 0)).collect();
            for post in &posts {
                *categories.entry(post.category()).or_insert(0) += 1;
            }
            println!("Categories ({}):", categories.len());
            for (category, count) in categories {
                println!("  {} ({})", category, count);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, route, category",
                content_type
            );
        }
    }

    Ok(())
}
