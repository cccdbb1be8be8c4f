//! Review images derived from the intermediate frame sequence.
//!
//! The tracking system can show a static thumbnail and a scrubbable
//! filmstrip next to a review version. Both are derived from the PNG
//! frames the daily render writes alongside the movie: the thumbnail is
//! the middle frame, the filmstrip is all frames concatenated into a
//! single row by an external image tool.
//!
//! Review images are strictly best-effort. A missing tool, a failed run or
//! an empty sequence degrades to "no image available" and never aborts the
//! submission.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

/// External tool used to concatenate frames into a filmstrip.
const CONCAT_TOOL: &str = "montage";

/// Optional images attached to a review submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewImages {
    /// Static thumbnail (the sequence's middle frame).
    pub thumbnail: Option<PathBuf>,
    /// Single-row filmstrip of all frames.
    pub filmstrip: Option<PathBuf>,
}

/// Derives review images from the rendered frame sequence in `frames_dir`.
pub fn generate_review_images(frames_dir: &Path) -> ReviewImages {
    let frames = sequence_frames(frames_dir);
    if frames.is_empty() {
        warn!(
            dir = %frames_dir.display(),
            "no rendered frames found, submitting without review images"
        );
        return ReviewImages::default();
    }

    let thumbnail = frames.get(frames.len() / 2).cloned();
    let filmstrip = build_filmstrip(frames_dir, &frames);
    debug!(
        frames = frames.len(),
        filmstrip = filmstrip.is_some(),
        "review images generated"
    );

    ReviewImages {
        thumbnail,
        filmstrip,
    }
}

fn sequence_frames(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut frames: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("png"))
        .collect();
    frames.sort();
    frames
}

fn build_filmstrip(dir: &Path, frames: &[PathBuf]) -> Option<PathBuf> {
    let tool = match which::which(CONCAT_TOOL) {
        Ok(tool) => tool,
        Err(_) => {
            warn!("'{CONCAT_TOOL}' not found, skipping filmstrip");
            return None;
        }
    };

    let out = dir.join("filmstrip.png");
    let status = Command::new(tool)
        .args(["-tile", "x1", "-geometry", "+0+0"])
        .args(frames)
        .arg(&out)
        .status();

    match status {
        Ok(status) if status.success() && out.is_file() => Some(out),
        Ok(status) => {
            warn!(%status, "filmstrip concatenation failed");
            None
        }
        Err(error) => {
            warn!(%error, "could not run '{CONCAT_TOOL}'");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_empty_sequence_degrades_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(generate_review_images(dir.path()), ReviewImages::default());
    }

    #[test]
    fn test_missing_directory_degrades_to_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("never_rendered");
        assert_eq!(generate_review_images(&gone), ReviewImages::default());
    }

    #[test]
    fn test_thumbnail_is_middle_frame() {
        let dir = tempfile::tempdir().unwrap();
        for frame in 1..=5 {
            fs::write(dir.path().join(format!("thumb_seq.{frame:08}.png")), b"").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), b"").unwrap();

        let images = generate_review_images(dir.path());
        assert_eq!(
            images.thumbnail.unwrap().file_name().unwrap(),
            "thumb_seq.00000003.png"
        );
    }
}
