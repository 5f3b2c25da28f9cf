//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Editorial;

/// Remove the generated public directory
pub fn run(app: &Editorial) -> Result<()> {
    if app.public_dir.exists() {
        fs::remove_dir_all(&app.public_dir)?;
        tracing::info!("Deleted: {:?}", app.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public_dir() {
        let tmp = TempDir::new().unwrap();
        let app = Editorial::new(tmp.path()).unwrap();
        fs::create_dir_all(app.public_dir.join("blog")).unwrap();

        run(&app).unwrap();
        assert!(!app.public_dir.exists());

        // Cleaning twice is fine
        run(&app).unwrap();
    }
}
