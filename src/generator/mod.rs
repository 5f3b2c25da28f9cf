//! Generator module - pre-renders every route to static HTML files

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::pages::PageRenderer;
use crate::Editorial;

/// Static site generator
pub struct Generator {
    app: Editorial,
    renderer: PageRenderer,
}

/// What a generation run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    pub pages: usize,
    pub assets: usize,
}

impl Generator {
    /// Create a new generator
    pub fn new(app: &Editorial) -> Result<Self> {
        let store = app.open_store()?;
        let renderer = PageRenderer::new(app.config.clone(), store)?;

        Ok(Self {
            app: app.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<GenerateReport> {
        let public_dir = &self.app.public_dir;
        fs::create_dir_all(public_dir)?;

        let mut report = GenerateReport {
            assets: self.copy_static_assets()?,
            ..GenerateReport::default()
        };

        self.write_page(&public_dir.join("index.html"), &self.renderer.render_home()?)?;
        report.pages += 1;

        let params = self.renderer.static_params();
        let blog_dir = self.app.config.blog_dir.trim_matches('/');
        for param in &params {
            let html = self.renderer.render_post(&param.slug)?;
            let output_path = public_dir
                .join(blog_dir)
                .join(&param.slug)
                .join("index.html");
            self.write_page(&output_path, &html)?;
            report.pages += 1;
        }

        self.write_page(
            &public_dir.join("404.html"),
            &self.renderer.render_not_found()?,
        )?;
        report.pages += 1;

        let params_json = serde_json::to_string_pretty(&params)?;
        fs::write(public_dir.join("static-params.json"), params_json)?;

        Ok(report)
    }

    fn write_page(&self, output_path: &Path, html: &str) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create dir {:?}", parent))?;
        }
        fs::write(output_path, html)
            .with_context(|| format!("Failed to write {:?}", output_path))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Copy the static directory (images, styles) to the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.app.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;
            let dest = self.app.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generate_memory_site() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("static/img")).unwrap();
        fs::write(tmp.path().join("static/img/logo.svg"), "<svg/>").unwrap();

        let app = Editorial::new(tmp.path()).unwrap();
        let report = Generator::new(&app).unwrap().generate().unwrap();
        assert_eq!(report, GenerateReport { pages: 5, assets: 1 });

        let public = tmp.path().join("public");
        assert!(public.join("index.html").exists());
        assert!(public.join("404.html").exists());
        assert!(public.join("img/logo.svg").exists());

        let post = fs::read_to_string(
            public.join("blog/getting-started-with-next-js/index.html"),
        )
        .unwrap();
        assert!(post.contains("Getting Started with Next.js"));

        let params: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(public.join("static-params.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(params.as_array().unwrap().len(), 3);
        assert_eq!(params[1]["slug"], "mastering-css-grid-layout");
    }

    #[test]
    fn test_generate_file_site() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("_config.yml"),
            "content:\n  source: files\nblog_dir: posts\n",
        )
        .unwrap();
        fs::create_dir_all(tmp.path().join("posts")).unwrap();
        fs::write(
            tmp.path().join("posts/hello-world.md"),
            "---\ntitle: Hello World\ndate: 2024-01-15\nauthor: Jane Smith\nexcerpt: Hi.\n---\n\nBody text.\n",
        )
        .unwrap();

        let app = Editorial::new(tmp.path()).unwrap();
        let report = Generator::new(&app).unwrap().generate().unwrap();
        assert_eq!(report.pages, 3);

        let post =
            fs::read_to_string(tmp.path().join("public/posts/hello-world/index.html")).unwrap();
        assert!(post.contains("<p>Body text.</p>"));
    }
}
