//! Error types for the generator pipeline
//!
//! Every failure is fatal for a run. Read and parse errors surface before any
//! output file is touched.

use std::path::PathBuf;

use thiserror::Error;

/// Why the settings document could not be used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedKind {
    /// The `explorer.fileNesting.patterns` object was not found
    MissingKey,
    /// The object opened at this byte offset never closes
    Unterminated {
        /// Offset of the opening brace in the comment-stripped text
        open: usize,
    },
}

impl std::fmt::Display for MalformedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingKey => {
                write!(f, "could not find \"{}\" object", crate::parser::PATTERNS_KEY)
            },
            Self::Unterminated { open } => {
                write!(f, "unterminated patterns object (opened at offset {open})")
            },
        }
    }
}

/// Errors that can occur while generating nesting rules
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Input settings file could not be read
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Settings text does not contain a usable patterns object
    #[error("malformed config: {0}")]
    MalformedConfig(MalformedKind),

    /// An output artifact could not be written
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Path that failed
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Generator configuration file is not valid TOML
    #[error("invalid generator config {}: {source}", .path.display())]
    Config {
        /// Path of the config file
        path: PathBuf,
        /// Parse error
        source: toml::de::Error,
    },
}
