//! Validation capability.
//!
//! The persistence layer never validates on its own; specialized
//! repositories call a [`Validator`] before mutating.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A single failed validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Joins violations into a single line.
///
/// # Examples
///
/// ```
/// use catalog_core::validation::{format_violations, Violation};
///
/// let violations = vec![
///     Violation::new("name", "Name is required"),
///     Violation::new("stock", "Stock cannot be negative"),
/// ];
/// assert_eq!(
///     format_violations(&violations),
///     "name: Name is required; stock: Stock cannot be negative"
/// );
/// ```
pub fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(Violation::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Checks an entity against a set of rules. An empty result means valid.
pub trait Validator<T>: Send + Sync {
    fn validate(&self, value: &T) -> Vec<Violation>;
}
