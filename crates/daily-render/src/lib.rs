//! # daily-render
//!
//! Render-side building blocks for quick dailies:
//!
//! - [`RenderTarget`] - typed capability interface over the host's
//!   pre-built render node network
//! - [`format_slate`] / [`SlateText`] - slate and burn-in text blocks
//! - [`select_codec`] / [`CodecSettings`] - per-platform, per-host-version
//!   codec policy table
//! - [`execute_daily_render`] - render invocation with guaranteed
//!   output-sink cleanup
//! - [`generate_review_images`] - thumbnail and filmstrip extraction from
//!   the intermediate frame sequence
//!
//! Nothing in this crate renders pixels itself; the host application owns
//! rendering. This crate only decides what to set on the host's nodes and
//! in what order.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod codec;
pub mod contact;
pub mod invoke;
pub mod slate;
pub mod target;

pub use codec::{CodecSettings, KnobValue, select_codec};
pub use contact::{ReviewImages, generate_review_images};
pub use invoke::{RenderJob, execute_daily_render};
pub use slate::{SlateText, format_slate};
pub use target::RenderTarget;
