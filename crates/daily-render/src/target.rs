//! Capability interface over the host's pre-built daily node network.

use std::path::Path;

use daily_core::{FrameRange, HostResult};

use crate::{CodecSettings, SlateText};

/// Typed interface to the pre-authored daily render network.
///
/// An adapter implements this over whatever host binding is in use, so the
/// orchestration logic never performs node or parameter lookups by string
/// name. One instance corresponds to one pasted node group in the session.
///
/// The adapter owns the mapping from these operations onto concrete nodes:
/// which reformat node takes the resolution, which writer takes the movie
/// path, which text nodes take the slate fragments.
pub trait RenderTarget {
    /// Sets the font used by all slate and burn-in text nodes.
    fn set_font(&mut self, font: &Path) -> HostResult<()>;

    /// Pushes the formatted slate and burn-in fragments onto the network's
    /// text nodes.
    fn apply_slate(&mut self, slate: &SlateText) -> HostResult<()>;

    /// Sets the output resolution of the movie reformat.
    fn set_resolution(&mut self, width: u32, height: u32) -> HostResult<()>;

    /// Sets the movie writer's output path.
    fn set_movie_path(&mut self, path: &Path) -> HostResult<()>;

    /// Sets the intermediate frame writer's output path pattern.
    fn set_frames_path(&mut self, path: &Path) -> HostResult<()>;

    /// Applies codec settings to the movie writer.
    fn set_codec(&mut self, settings: &CodecSettings) -> HostResult<()>;

    /// Enables or disables the network's output sinks.
    ///
    /// The sinks ship disabled so that an idle daily node never takes part
    /// in other renders; they are only live for the duration of one
    /// [`execute`](RenderTarget::execute) call.
    fn set_enabled(&mut self, enabled: bool) -> HostResult<()>;

    /// Synchronously renders all output sinks over the given frame range
    /// and view.
    fn execute(&mut self, range: FrameRange, view: &str) -> HostResult<()>;
}
