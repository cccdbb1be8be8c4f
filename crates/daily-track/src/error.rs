//! Error types for tracking submissions.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`TrackError`] as the error type.
pub type TrackResult<T> = std::result::Result<T, TrackError>;

/// Errors that can occur while submitting a daily for review.
#[derive(Debug, Error)]
pub enum TrackError {
    /// A remote API call failed.
    #[error("tracking API call failed: {0}")]
    Api(String),

    /// An attachment upload failed.
    #[error("upload of '{path}' to field '{field}' failed: {reason}")]
    Upload {
        /// Local file that was being uploaded.
        path: PathBuf,
        /// Attachment field on the remote record.
        field: String,
        /// Failure description.
        reason: String,
    },

    /// A configured post hook has no registered implementation.
    #[error("post hook '{0}' is not registered")]
    UnknownHook(String),

    /// A post hook failed.
    #[error("post hook '{name}' failed: {source}")]
    Hook {
        /// Hook name.
        name: String,
        /// The hook's own error.
        #[source]
        source: crate::hooks::HookError,
    },

    /// I/O error while reading a file for upload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackError {
    /// Creates a [`TrackError::Api`] error.
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }
}
