//! Output formatting.
//!
//! `--format json` prints compact JSON; commands with a human rendering use
//! [`pretty`] instead, everything else falls back to indented JSON.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value that has no dedicated pretty rendering.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(value),
        OutputFormat::Pretty => json::format_json_pretty(value),
    }
}
