//! Generator configuration
//!
//! Paths and templates for one run. Loaded from an optional TOML file; every
//! field falls back to the built-in default when missing.
//!
//! ```toml
//! input_path = ".vscode/settings.json"
//! output_rules_path = "lua/nesting-rules/rules.lua"
//! output_doc_path = "doc/nesting-rules.md"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::GenerateError;

/// Placeholder replaced by the serialized rule set
pub const RULES_PLACEHOLDER: &str = "{{rules}}";

/// Placeholder replaced by the generation timestamp
pub const TIMESTAMP_PLACEHOLDER: &str = "{{timestamp}}";

/// Built-in template for the generated Lua module
pub const DEFAULT_MODULE_TEMPLATE: &str = r"-- This file is generated by nestgen. Do not edit it by hand.
-- Regenerate it from the editor's file-nesting settings instead.

local M = {}

M.nesting_rules = {{rules}}

return M
";

/// Built-in template for the documentation page
pub const DEFAULT_DOC_TEMPLATE: &str = r"# File nesting rules

Nesting rules converted from the editor's `explorer.fileNesting.patterns` setting.
Each rule nests the files matching `files` under the file matching `pattern`.

Last updated: {{timestamp}}

## Usage

```lua
nesting_rules = {{rules}}
```
";

/// Configuration for one generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Settings file holding `explorer.fileNesting.patterns`
    pub input_path: PathBuf,
    /// Where the Lua rules module is written
    pub output_rules_path: PathBuf,
    /// Where the documentation page is written
    pub output_doc_path: PathBuf,
    /// Template for the documentation page
    ///
    /// `check` ignores the lines rendered from template lines holding
    /// `{{timestamp}}`.
    pub doc_template: String,
    /// Template for the Lua rules module
    pub module_template: String,
    /// Replace every `"` with `'` in the rendered artifacts
    pub normalize_quotes: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(".vscode/settings.json"),
            output_rules_path: PathBuf::from("lua/nesting-rules/rules.lua"),
            output_doc_path: PathBuf::from("doc/nesting-rules.md"),
            doc_template: DEFAULT_DOC_TEMPLATE.to_string(),
            module_template: DEFAULT_MODULE_TEMPLATE.to_string(),
            normalize_quotes: true,
        }
    }
}

impl GeneratorConfig {
    /// Load a config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let content = fs::read_to_string(path)
            .map_err(|source| GenerateError::FileAccess { path: path.to_path_buf(), source })?;
        Self::from_toml(&content, path)
    }

    /// Parse config text; `origin` is only used for error messages
    pub fn from_toml(content: &str, origin: &Path) -> Result<Self, GenerateError> {
        toml::from_str(content)
            .map_err(|source| GenerateError::Config { path: origin.to_path_buf(), source })
    }

    /// Override the input path
    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    /// Override both output paths
    #[must_use]
    pub fn with_outputs(mut self, rules: impl Into<PathBuf>, doc: impl Into<PathBuf>) -> Self {
        self.output_rules_path = rules.into();
        self.output_doc_path = doc.into();
        self
    }

    /// Resolve relative paths against `root`
    #[must_use]
    pub fn rooted_at(mut self, root: &Path) -> Self {
        for path in [&mut self.input_path, &mut self.output_rules_path, &mut self.output_doc_path] {
            if path.is_relative() {
                *path = root.join(&*path);
            }
        }
        self
    }
}
