//! JSON output formatting.

use serde::Serialize;

/// Compact JSON, one value per line. Suited to piping into `jq`.
pub fn format_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Indented JSON for terminals.
pub fn format_json_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
