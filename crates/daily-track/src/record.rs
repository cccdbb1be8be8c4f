//! The review version payload.

use std::path::{Path, PathBuf};

use daily_core::{EntityRef, FrameRange};
use serde_json::{Map, Value, json};

/// Remote record type created for each daily.
pub const RECORD_TYPE: &str = "Version";

/// Attachment field the rendered movie is uploaded to.
pub const MOVIE_FIELD: &str = "sg_uploaded_movie";

/// Attachment field for the static thumbnail.
pub const THUMBNAIL_FIELD: &str = "thumb_image";

/// Attachment field for the filmstrip.
pub const FILMSTRIP_FIELD: &str = "filmstrip_thumb_image";

/// Everything the tracking system is told about one daily.
#[derive(Debug, Clone)]
pub struct VersionRecord {
    /// Submission name chosen in the comment dialog.
    pub name: String,
    /// Iteration number of this render.
    pub iteration: i64,
    /// Artist comment.
    pub description: String,
    /// Project link.
    pub project: EntityRef,
    /// Entity link, when the session is bound to one.
    pub entity: Option<EntityRef>,
    /// Task link, when the session is bound to one.
    pub task: Option<EntityRef>,
    /// The submitting user, when the tracking system knows one.
    pub user: Option<EntityRef>,
    /// The frame range covered by the movie.
    pub range: FrameRange,
    /// Rendered movie on disk.
    pub movie_path: PathBuf,
    /// Optional static thumbnail.
    pub thumbnail: Option<PathBuf>,
    /// Optional filmstrip.
    pub filmstrip: Option<PathBuf>,
}

impl VersionRecord {
    /// The record's display code, matching the bottom-left burn-in.
    pub fn code(&self) -> String {
        format!("{}#{}", self.name, self.iteration)
    }

    /// Builds the field mapping for the remote create call.
    pub fn fields(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        fields.insert("code".into(), json!(self.code()));
        fields.insert("description".into(), json!(self.description));
        fields.insert("project".into(), link(&self.project));
        if let Some(entity) = &self.entity {
            fields.insert("entity".into(), link(entity));
        }
        if let Some(task) = &self.task {
            fields.insert("sg_task".into(), link(task));
        }
        if let Some(user) = &self.user {
            fields.insert("user".into(), link(user));
        }
        fields.insert("sg_first_frame".into(), json!(self.range.first()));
        fields.insert("sg_last_frame".into(), json!(self.range.last()));
        fields.insert("frame_count".into(), json!(self.range.count()));
        fields.insert("frame_range".into(), json!(self.range.to_string()));
        fields.insert(
            "sg_path_to_movie".into(),
            json!(slash_path(&self.movie_path)),
        );
        fields.insert("sg_movie_has_slate".into(), json!(true));
        fields
    }
}

fn link(entity: &EntityRef) -> Value {
    json!({ "type": entity.kind, "id": entity.id })
}

// Paths go to the tracking system with forward slashes on every platform.
fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
