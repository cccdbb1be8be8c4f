//! Error types for template operations.

use thiserror::Error;

/// Result type alias using [`TemplateError`] as the error type.
pub type TemplateResult<T> = std::result::Result<T, TemplateError>;

/// Errors that can occur while parsing or applying a path template.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The template pattern itself is malformed.
    #[error("invalid template '{pattern}': {reason}")]
    Parse {
        /// The offending pattern.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The template does not define a field the caller requires.
    #[error("template has no '{0}' field")]
    UnknownField(String),

    /// A field referenced by the template has no value in the mapping.
    #[error("missing value for template field '{0}'")]
    MissingField(String),

    /// A field value has the wrong type for its template spec.
    #[error("template field '{field}' expects {expected} value")]
    FieldType {
        /// Field name.
        field: String,
        /// Expected value kind.
        expected: &'static str,
    },

    /// The generated filesystem scan pattern was rejected.
    #[error("invalid scan pattern: {0}")]
    Scan(#[from] glob::PatternError),
}

impl TemplateError {
    /// Creates a [`TemplateError::Parse`] error.
    pub fn parse(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Parse {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }
}
