//! Check that generated artifacts match the current settings

use nestgen::output::OutputMode;
use nestgen::{GeneratorConfig, Pipeline};

/// Compare the artifacts on disk with a fresh render (for CI)
///
/// Returns `false` when anything is stale.
pub fn check(config: GeneratorConfig, mode: OutputMode) -> anyhow::Result<bool> {
    let pipeline = Pipeline::new(config).quiet(mode == OutputMode::Json);
    let report = pipeline.check()?;
    report.render(mode);
    Ok(report.is_up_to_date())
}
