//! nestgen - Generate Lua file-nesting rules from an editor's settings
//!
//! Reads the `explorer.fileNesting.patterns` object from a JSON-like settings
//! file, converts each glob into a Lua pattern, and emits a rules module plus
//! a documentation page embedding the same table.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod convert;
pub mod emit;
pub mod error;
pub mod lua;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod reader;

pub use config::GeneratorConfig;
pub use convert::{Rule, RuleSet};
pub use error::{GenerateError, MalformedKind};
pub use pipeline::{Artifacts, Pipeline};
