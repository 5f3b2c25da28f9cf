//! Front-matter parsing for post files

use serde::Deserialize;

use super::Frontmatter;

/// Front-matter of a post file: the post metadata plus an optional slug
#[derive(Debug, Clone, Deserialize)]
pub struct FileFrontMatter {
    /// Overrides the slug derived from the file name
    #[serde(default)]
    pub slug: Option<String>,

    #[serde(flatten)]
    pub meta: Frontmatter,
}

impl FileFrontMatter {
    /// Parse front-matter from file content
    /// Returns (front_matter, remaining_content)
    pub fn parse(content: &str) -> Result<(Self, &str), String> {
        let (yaml, body) =
            split_yaml(content).ok_or_else(|| "missing `---` front-matter block".to_string())?;

        let fm = serde_yaml::from_str::<FileFrontMatter>(yaml).map_err(|e| e.to_string())?;
        Ok((fm, body))
    }
}

/// Split a leading `---` delimited YAML block from the body.
/// Both delimiters must be lines of exactly `---`, trailing whitespace aside.
fn split_yaml(content: &str) -> Option<(&str, &str)> {
    let content = content.trim_start();
    let mut lines = content.split_inclusive('\n');

    let opening = lines.next()?;
    if !is_delimiter(opening) {
        return None;
    }

    let yaml_start = opening.len();
    let mut offset = yaml_start;
    for line in lines {
        if is_delimiter(line) {
            let yaml = &content[yaml_start..offset];
            let body = &content[offset + line.len()..];
            return Some((yaml, body.trim_start_matches(['\n', '\r'])));
        }
        offset += line.len();
    }

    None
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}
