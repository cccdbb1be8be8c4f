//! Render invocation with guaranteed output-sink cleanup.

use std::path::Path;

use daily_core::{FrameRange, HostResult};
use tracing::{debug, info};

use crate::{CodecSettings, RenderTarget};

/// Everything the invoker needs to configure one daily render.
#[derive(Debug)]
pub struct RenderJob<'a> {
    /// Output path for the movie writer.
    pub movie_path: &'a Path,
    /// Output path pattern for the intermediate frame writer.
    pub frames_path: &'a Path,
    /// Movie resolution (width, height).
    pub resolution: (u32, u32),
    /// Writer codec settings.
    pub codec: &'static CodecSettings,
    /// The session's frame range.
    pub range: FrameRange,
    /// The view to render through (view 0 on stereo sessions).
    pub view: &'a str,
}

/// Configures the target and synchronously renders one daily.
///
/// The rendered range is `[first_frame - 1 ..= last_frame]`: the extra
/// leading frame carries the slate. The output sinks are enabled only for
/// the duration of the execute call and are disabled again before any
/// render failure propagates; there is no retry.
pub fn execute_daily_render(target: &mut dyn RenderTarget, job: &RenderJob<'_>) -> HostResult<()> {
    let (width, height) = job.resolution;
    target.set_resolution(width, height)?;
    target.set_frames_path(job.frames_path)?;
    target.set_movie_path(job.movie_path)?;
    target.set_codec(job.codec)?;

    let render_range = FrameRange::new(job.range.first() - 1, job.range.last());
    debug!(
        range = %render_range,
        view = job.view,
        file_type = job.codec.file_type,
        "executing daily render"
    );

    target.set_enabled(true)?;
    let rendered = target.execute(render_range, job.view);
    let disabled = target.set_enabled(false);
    rendered?;
    disabled?;

    info!(movie = %job.movie_path.display(), "daily render complete");
    Ok(())
}
