//! # daily-app
//!
//! The quick-dailies pipeline.
//!
//! [`DailiesApp`] wires the session seams together and runs the single
//! linear flow per invocation:
//!
//! ```text
//! prompt -> resolve iteration -> apply template -> slate -> render
//!        -> review images -> submit -> post hooks -> notify
//! ```
//!
//! There is no branching back to earlier stages and no state persisted
//! across invocations; everything the pipeline knows it learns from its
//! injected collaborators and the filesystem at call time.
//!
//! The host application itself is represented by two seams the embedding
//! adapter implements: [`HostSession`] for session state and
//! [`CommentDialog`] for the modal name/comment form. The render network
//! seam lives in [`daily_render::RenderTarget`], the tracking seam in
//! [`daily_track::TrackingClient`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod app;
pub mod error;
pub mod host;
pub mod settings;

pub use app::{CreatedDaily, DailiesApp, DailyOutcome};
pub use error::{DailyError, DailyResult};
pub use host::{CommentDialog, HostSession, SubmissionInput};
pub use settings::DailiesSettings;
