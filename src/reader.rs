//! Reads the editor settings file

use std::fs;
use std::path::Path;

use crate::error::GenerateError;

/// Read the whole settings file
pub fn read_config(path: &Path) -> Result<String, GenerateError> {
    log::debug!("reading {}", path.display());
    fs::read_to_string(path)
        .map_err(|source| GenerateError::FileAccess { path: path.to_path_buf(), source })
}
