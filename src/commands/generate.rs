//! Generate the rules module and documentation

use nestgen::output::OutputMode;
use nestgen::{GeneratorConfig, Pipeline, emit};

/// Run the full pipeline and write both artifacts
pub fn generate(config: GeneratorConfig, mode: OutputMode) -> anyhow::Result<bool> {
    let pipeline = Pipeline::new(config).quiet(mode == OutputMode::Json);
    let report = pipeline.generate(&emit::now_timestamp())?;
    report.render(mode);
    Ok(true)
}
