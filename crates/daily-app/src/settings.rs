//! The configuration surface.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::DailyResult;

/// Settings for the dailies pipeline.
///
/// Loaded from the pipeline configuration as YAML; every field has a
/// default so a minimal document only needs to override what differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailiesSettings {
    /// Path template for rendered movies. Must define `name` and
    /// `iteration` fields.
    pub movie_template: String,

    /// Movie width in pixels.
    pub width: u32,

    /// Movie height in pixels.
    pub height: u32,

    /// Whether the rendered movie is uploaded to the review version.
    /// When off, the version only references the movie by path.
    pub upload_movie: bool,

    /// Post hooks to run after submission, in order.
    pub post_hooks: Vec<String>,

    /// Font applied to slate and burn-in text nodes.
    pub font: Option<PathBuf>,

    /// Resource file holding the pre-authored daily node network.
    pub node_network: PathBuf,
}

impl Default for DailiesSettings {
    fn default() -> Self {
        Self {
            movie_template: "dailies/{name}_{iteration:03d}.mov".to_string(),
            width: 1280,
            height: 720,
            upload_movie: true,
            post_hooks: Vec::new(),
            font: None,
            node_network: PathBuf::from("resources/quickdailynode.nk"),
        }
    }
}

impl DailiesSettings {
    /// Parses settings from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Loads settings from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> DailyResult<Self> {
        let source = std::fs::read_to_string(path)?;
        Ok(Self::from_yaml(&source)?)
    }
}
