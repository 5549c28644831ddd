//! Output formatting for human and JSON modes
//!
//! Run summaries render either as human-readable text or machine-parseable
//! JSON.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a generate run
#[derive(Debug, Serialize)]
pub struct GenerateReport {
    /// Number of rules written
    pub rules: usize,
    /// How many of them match case-insensitively
    pub ignore_case: usize,
    /// Settings file that was read
    pub input: String,
    /// Lua module that was written
    pub rules_path: String,
    /// Documentation page that was written
    pub doc_path: String,
    /// Timestamp embedded in the documentation
    pub timestamp: String,
}

/// An output artifact that does not match what would be generated
#[derive(Debug, Serialize)]
pub struct StaleArtifact {
    /// Path of the artifact
    pub path: String,
    /// Why it is considered stale
    pub reason: String,
}

/// Result of a check run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// Number of rules in the current input
    pub rules: usize,
    /// Artifacts that need regenerating
    pub stale: Vec<StaleArtifact>,
}

/// Error summary for JSON mode
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    /// Always false
    pub success: bool,
    /// The error message
    pub error: String,
}

impl GenerateReport {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!(
            "\nGenerated {} rule(s) ({} case-insensitive) from {}",
            self.rules, self.ignore_case, self.input
        );
        println!("  {}", self.rules_path);
        println!("  {}", self.doc_path);
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl CheckReport {
    /// Whether every artifact is current
    #[must_use]
    pub fn is_up_to_date(&self) -> bool {
        self.stale.is_empty()
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.is_up_to_date() {
            println!("\nNesting rules are up to date ({} rule(s)).", self.rules);
            return;
        }

        println!("\nStale:");
        for artifact in &self.stale {
            println!("  {} ({})", artifact.path, artifact.reason);
        }
        println!("\nRun 'nestgen generate' to regenerate.");
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ErrorReport {
    /// Build from any displayable error
    #[must_use]
    pub fn new(error: &impl std::fmt::Display) -> Self {
        Self { success: false, error: error.to_string() }
    }

    /// Render the error based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("error: {}", self.error),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
