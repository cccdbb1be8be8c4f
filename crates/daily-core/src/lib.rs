//! # daily-core
//!
//! Core types for the quick-dailies workspace.
//!
//! This crate provides the vocabulary shared by every other crate:
//!
//! - [`FrameRange`] - Inclusive first/last frame pair read from session state
//! - [`Context`], [`EntityRef`] - Read-only snapshot of the tracking context
//! - [`Platform`], [`HostVersion`] - Codec-policy dispatch inputs
//!
//! ## Crate Structure
//!
//! This crate is the foundation of the workspace and has no internal
//! dependencies. All other dailies crates depend on `daily-core`:
//!
//! ```text
//! daily-core (this crate)
//!    ^
//!    |
//!    +-- daily-template (path templates, iteration resolver)
//!    +-- daily-render (render target, slate, codec policy)
//!    +-- daily-track (submission payloads, post hooks)
//!    +-- daily-app (the create-daily pipeline)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod context;
pub mod frames;
pub mod host;

pub use context::{Context, EntityRef};
pub use frames::FrameRange;
pub use host::{HostError, HostResult, HostVersion, ParseVersionError, Platform};
