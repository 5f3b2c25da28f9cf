//! URL helper functions

use crate::config::SiteConfig;

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/css/style.css") // -> "/blog/css/style.css"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// URL of a post detail page
pub fn post_url(config: &SiteConfig, slug: &str) -> String {
    url_for(
        config,
        &format!("{}/{}", config.blog_dir.trim_matches('/'), slug),
    )
}

/// Encode a URL query component
pub fn encode_url(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, percent_encoding::NON_ALPHANUMERIC).to_string()
}

/// The featured image, or a sized placeholder keyed by `query`
pub fn image_or_placeholder(image: Option<&str>, width: u32, height: u32, query: &str) -> String {
    match image {
        Some(src) if !src.is_empty() => src.to_string(),
        _ => format!(
            "/placeholder.svg?height={}&width={}&query={}",
            height,
            width,
            encode_url(query)
        ),
    }
}

/// Portrait image for an author
pub fn avatar_url(author: &str) -> String {
    format!(
        "/thoughtful-artist.png?height=100&width=100&query={}",
        encode_url(&format!("portrait of {}", author))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            root: "/site/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/css/style.css"), "/site/css/style.css");
        assert_eq!(url_for(&config, ""), "/site/");
        assert_eq!(url_for(&SiteConfig::default(), ""), "/");
    }

    #[test]
    fn test_post_url() {
        assert_eq!(
            post_url(&SiteConfig::default(), "mastering-css-grid-layout"),
            "/blog/mastering-css-grid-layout"
        );
        assert_eq!(post_url(&test_config(), "a"), "/site/blog/a");
    }

    #[test]
    fn test_image_or_placeholder() {
        assert_eq!(
            image_or_placeholder(Some("/cover.png"), 600, 400, "x"),
            "/cover.png"
        );
        assert_eq!(
            image_or_placeholder(None, 1200, 600, "My Post"),
            "/placeholder.svg?height=600&width=1200&query=My%20Post"
        );
    }

    #[test]
    fn test_avatar_url() {
        assert_eq!(
            avatar_url("Jane Smith"),
            "/thoughtful-artist.png?height=100&width=100&query=portrait%20of%20Jane%20Smith"
        );
    }
}
