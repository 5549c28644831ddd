//! Template rendering and artifact writing

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, TimeZone};

use crate::config::{RULES_PLACEHOLDER, TIMESTAMP_PLACEHOLDER};
use crate::error::GenerateError;

/// Format of the `Last updated` timestamp
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format a timestamp the way the documentation embeds it
#[must_use]
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current local time, formatted for the documentation
#[must_use]
pub fn now_timestamp() -> String {
    format_timestamp(&chrono::Local::now())
}

/// Fill a template with the rules literal and timestamp
///
/// With `normalize_quotes` every `"` in the result becomes `'`, including any
/// that came from the template prose.
#[must_use]
pub fn render(template: &str, rules: &str, timestamp: &str, normalize_quotes: bool) -> String {
    let rendered =
        template.replace(RULES_PLACEHOLDER, rules).replace(TIMESTAMP_PLACEHOLDER, timestamp);
    if normalize_quotes { rendered.replace('"', "'") } else { rendered }
}

/// Overwrite `path` with `text`, one line at a time
pub fn write_lines(path: &Path, text: &str) -> Result<(), GenerateError> {
    let wrap = |source: std::io::Error| GenerateError::Write { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    for line in text.lines() {
        writeln!(out, "{line}").map_err(wrap)?;
    }
    out.flush().map_err(wrap)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}
