//! Text helpers

/// Truncate text to at most `length` characters, cutting on a word boundary
/// and appending an ellipsis. A length of zero disables truncation.
pub fn truncate_chars(text: &str, length: usize) -> String {
    if length == 0 || text.chars().count() <= length {
        return text.to_string();
    }

    let truncated: String = text.chars().take(length).collect();
    let at_boundary = text.chars().nth(length).is_some_and(char::is_whitespace);
    let cut = match truncated.rfind(char::is_whitespace) {
        _ if at_boundary => truncated.as_str(),
        Some(pos) if pos > 0 => &truncated[..pos],
        _ => truncated.as_str(),
    };

    let cut = cut.trim_end_matches(|c: char| c.is_whitespace() || c == ',' || c == '.');
    format!("{}…", cut)
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="/x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;/x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_short_text_untouched() {
        assert_eq!(truncate_chars("Hello world", 20), "Hello world");
        assert_eq!(truncate_chars("Hello world", 0), "Hello world");
    }

    #[test]
    fn test_cuts_on_word_boundary() {
        assert_eq!(
            truncate_chars("CSS Grid has revolutionized web layout design.", 20),
            "CSS Grid has…"
        );
    }

    #[test]
    fn test_single_long_word() {
        assert_eq!(truncate_chars("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(truncate_chars("héllo wörld again", 11), "héllo wörld…");
    }
}
