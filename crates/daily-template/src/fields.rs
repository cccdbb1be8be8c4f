//! Field value mappings consumed and produced by templates.

use std::collections::BTreeMap;
use std::fmt;

/// A mapping from template field names to values.
///
/// Ordered so that generated paths and diagnostics are deterministic.
pub type TemplateFields = BTreeMap<String, FieldValue>;

/// A single template field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A string field value.
    Str(String),
    /// An integer field value.
    Int(i64),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Str(s) => write!(f, "{s}"),
            FieldValue::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}
