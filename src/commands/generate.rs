//! Generate static files

use anyhow::Result;

use crate::generator::Generator;
use crate::Editorial;

/// Pre-render every route into the public directory
pub fn run(app: &Editorial) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(app)?;
    let report = generator.generate()?;

    tracing::info!(
        "Generated {} pages and copied {} assets in {:.2}s",
        report.pages,
        report.assets,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
