//! Error types for the dailies pipeline.

use daily_core::HostError;
use daily_template::TemplateError;
use daily_track::TrackError;
use thiserror::Error;

/// Result type alias using [`DailyError`] as the error type.
pub type DailyResult<T> = std::result::Result<T, DailyError>;

/// Errors that can abort a daily-creation run.
///
/// User cancellation is not an error; it is reported through
/// [`crate::DailyOutcome::Cancelled`].
#[derive(Debug, Error)]
pub enum DailyError {
    /// Template parsing, application or scanning failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The host adapter reported a failure.
    #[error("host error: {0}")]
    Host(#[from] HostError),

    /// Submission to the tracking system failed.
    #[error("tracking error: {0}")]
    Track(#[from] TrackError),

    /// The settings document could not be parsed.
    #[error("settings error: {0}")]
    Settings(#[from] serde_yaml::Error),

    /// I/O error outside the host (output directories, temp files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
