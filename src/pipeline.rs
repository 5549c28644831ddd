//! The generator pipeline: read → extract → convert → serialize → emit
//!
//! Read and parse failures return before any output is written.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::config::{GeneratorConfig, RULES_PLACEHOLDER, TIMESTAMP_PLACEHOLDER};
use crate::convert::{self, RuleSet};
use crate::emit;
use crate::error::GenerateError;
use crate::lua::ToLua;
use crate::output::{CheckReport, GenerateReport, StaleArtifact};
use crate::parser;
use crate::reader;

/// Rendered outputs for one rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    /// Serialized rule set as a Lua table literal
    pub rules_literal: String,
    /// Final text of the Lua module
    pub module: String,
    /// Final text of the documentation page
    pub doc: String,
}

/// Runs the stages for one configuration
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: GeneratorConfig,
    quiet: bool,
}

impl Pipeline {
    /// Create a pipeline that prints progress to stdout
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config, quiet: false }
    }

    /// Suppress progress lines
    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// The configuration this pipeline runs with
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn progress(&self, message: &str) {
        if !self.quiet {
            println!("{message}");
        }
        log::debug!("{message}");
    }

    /// Read, extract and convert the input into a rule set
    pub fn load_rules(&self) -> Result<RuleSet, GenerateError> {
        self.progress(&format!("Reading {}", self.config.input_path.display()));
        let text = reader::read_config(&self.config.input_path)?;

        self.progress(&format!("Extracting \"{}\"", parser::PATTERNS_KEY));
        let patterns = parser::extract_patterns(&text)?;

        self.progress(&format!("Converting {} pattern(s)", patterns.len()));
        Ok(convert::build_rule_set(&patterns))
    }

    /// Serialize a rule set and fill both templates
    #[must_use]
    pub fn render(&self, rules: &RuleSet, timestamp: &str) -> Artifacts {
        self.progress("Serializing rules");
        render_artifacts(&self.config, rules, timestamp)
    }

    /// Run every stage and write both artifacts
    pub fn generate(&self, timestamp: &str) -> Result<GenerateReport, GenerateError> {
        let rules = self.load_rules()?;
        let artifacts = self.render(&rules, timestamp);

        self.progress(&format!("Writing {}", self.config.output_rules_path.display()));
        emit::write_lines(&self.config.output_rules_path, &artifacts.module)?;

        self.progress(&format!("Writing {}", self.config.output_doc_path.display()));
        emit::write_lines(&self.config.output_doc_path, &artifacts.doc)?;

        Ok(GenerateReport {
            rules: rules.len(),
            ignore_case: rules.values().filter(|r| r.ignore_case == Some(true)).count(),
            input: self.config.input_path.display().to_string(),
            rules_path: self.config.output_rules_path.display().to_string(),
            doc_path: self.config.output_doc_path.display().to_string(),
            timestamp: timestamp.to_string(),
        })
    }

    /// Compare freshly rendered artifacts with the files on disk
    ///
    /// Lines rendered from a template line holding `{{timestamp}}` are ignored.
    pub fn check(&self) -> Result<CheckReport, GenerateError> {
        let rules = self.load_rules()?;
        let artifacts = self.render(&rules, &emit::now_timestamp());
        let quotes = self.config.normalize_quotes;

        let stale = [
            (&self.config.output_rules_path, &artifacts.module, &self.config.module_template),
            (&self.config.output_doc_path, &artifacts.doc, &self.config.doc_template),
        ]
        .into_iter()
        .filter_map(|(path, expected, template)| {
            stale_reason(path, expected, timestamp_lines(template, quotes).as_ref())
        })
        .collect();

        Ok(CheckReport { rules: rules.len(), stale })
    }
}

/// Render both artifacts without touching the filesystem
#[must_use]
pub fn render_artifacts(config: &GeneratorConfig, rules: &RuleSet, timestamp: &str) -> Artifacts {
    let rules_literal = rules.to_lua().to_lua_literal();
    let quotes = config.normalize_quotes;
    let module = emit::render(&config.module_template, &rules_literal, timestamp, quotes);
    let doc = emit::render(&config.doc_template, &rules_literal, timestamp, quotes);
    Artifacts { rules_literal, module, doc }
}

/// Match the rendered form of every template line holding `{{timestamp}}`
///
/// The text around the placeholder must match exactly; the stamp itself may be
/// anything. Returns `None` when the template has no timestamp line. A line
/// that also holds `{{rules}}` spans several rendered lines and is not matched.
#[must_use]
pub fn timestamp_lines(template: &str, normalize_quotes: bool) -> Option<Regex> {
    let alternatives: Vec<String> = template
        .lines()
        .filter(|line| line.contains(TIMESTAMP_PLACEHOLDER) && !line.contains(RULES_PLACEHOLDER))
        .map(|line| {
            let line = if normalize_quotes { line.replace('"', "'") } else { line.to_string() };
            line.split(TIMESTAMP_PLACEHOLDER).map(regex::escape).collect::<Vec<_>>().join(".*")
        })
        .collect();
    if alternatives.is_empty() {
        return None;
    }
    Regex::new(&format!("^(?:{})$", alternatives.join("|"))).ok()
}

/// Compare two artifact texts, skipping lines `stamped` matches and the trailing newline
#[must_use]
pub fn same_ignoring_timestamp(a: &str, b: &str, stamped: Option<&Regex>) -> bool {
    let significant = |text: &str| -> Vec<String> {
        text.lines()
            .filter(|line| stamped.is_none_or(|re| !re.is_match(line)))
            .map(str::to_string)
            .collect()
    };
    significant(a) == significant(b)
}

fn stale_reason(path: &Path, expected: &str, stamped: Option<&Regex>) -> Option<StaleArtifact> {
    let reason = match fs::read_to_string(path) {
        Ok(actual) if same_ignoring_timestamp(&actual, expected, stamped) => return None,
        Ok(_) => "content differs".to_string(),
        Err(err) => err.to_string(),
    };
    Some(StaleArtifact { path: path.display().to_string(), reason })
}
