//! Session-level seams implemented by the host adapter.

use std::path::Path;

use daily_core::{FrameRange, HostResult, HostVersion};

/// Session state and services of the host application.
pub trait HostSession {
    /// The session's current frame range.
    fn frame_range(&self) -> HostResult<FrameRange>;

    /// The session's view names, in host order.
    ///
    /// Stereo sessions return more than one entry; the pipeline renders
    /// through the first.
    fn views(&self) -> HostResult<Vec<String>>;

    /// The host application version.
    fn version(&self) -> HostVersion;

    /// Pastes a pre-authored node network from a resource file into the
    /// session.
    fn paste_node_network(&mut self, resource: &Path) -> HostResult<()>;

    /// Shows a message to the user through the host UI.
    fn notify(&self, message: &str);
}

/// What the user typed into the comment dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    /// Submission name.
    pub name: String,
    /// Free-form comment.
    pub comment: String,
}

/// The modal name/comment form.
pub trait CommentDialog {
    /// Presents the dialog and blocks until the user answers.
    ///
    /// Returns `None` when the user cancels; cancellation aborts the whole
    /// daily-creation flow before any side effect.
    fn prompt(&mut self, default_name: &str) -> HostResult<Option<SubmissionInput>>;
}
