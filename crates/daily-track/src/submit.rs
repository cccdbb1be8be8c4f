//! Submission of a finished daily.

use tracing::{debug, info};

use crate::{
    FILMSTRIP_FIELD, MOVIE_FIELD, RECORD_TYPE, THUMBNAIL_FIELD, TrackResult, TrackingClient,
    VersionRecord,
};

/// Creates the review version and uploads its attachments.
///
/// The movie upload is skipped when `upload_movie` is off (the record then
/// only references the movie by path). Review image uploads run for
/// whichever images were generated. Any failure propagates as-is: no
/// retry, and the rendered movie stays on disk for manual recovery.
pub fn submit(
    client: &mut dyn TrackingClient,
    record: &VersionRecord,
    upload_movie: bool,
) -> TrackResult<i64> {
    let fields = record.fields();
    let id = client.create_record(RECORD_TYPE, &fields)?;
    info!(id, code = %record.code(), "review version created");

    if upload_movie {
        client.upload(RECORD_TYPE, id, MOVIE_FIELD, &record.movie_path)?;
        debug!(id, movie = %record.movie_path.display(), "movie uploaded");
    }
    if let Some(thumbnail) = &record.thumbnail {
        client.upload(RECORD_TYPE, id, THUMBNAIL_FIELD, thumbnail)?;
    }
    if let Some(filmstrip) = &record.filmstrip {
        client.upload(RECORD_TYPE, id, FILMSTRIP_FIELD, filmstrip)?;
    }

    Ok(id)
}
