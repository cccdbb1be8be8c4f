//! # daily-track
//!
//! Submission of finished dailies to the production-tracking system.
//!
//! - [`VersionRecord`] - the review version payload (code, description,
//!   links, frame range, movie path)
//! - [`TrackingClient`] - capability seam over the remote tracking API
//! - [`submit`] - create the record and upload the movie and review images
//! - [`PostHook`] / [`HookRegistry`] - named hooks invoked after a
//!   successful submission
//!
//! The tracking system itself is an external collaborator; this crate only
//! builds payloads and drives the client seam. There is no retry and no
//! rollback: a failed submission leaves the rendered movie on disk for
//! manual recovery.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod client;
pub mod error;
pub mod hooks;
pub mod record;
pub mod submit;

pub use client::TrackingClient;
pub use error::{TrackError, TrackResult};
pub use hooks::{HookContext, HookError, HookRegistry, PostHook};
pub use record::{
    FILMSTRIP_FIELD, MOVIE_FIELD, RECORD_TYPE, THUMBNAIL_FIELD, VersionRecord,
};
pub use submit::submit;
