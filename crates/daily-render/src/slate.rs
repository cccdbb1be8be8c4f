//! Slate and burn-in text formatting.
//!
//! A daily carries three persistent burn-in corners plus one full slate
//! frame. All four fragments are plain string interpolation over the
//! session context; pushing them onto the host's text nodes is a separate
//! step ([`crate::RenderTarget::apply_slate`]).

use std::fmt::Write as _;

use chrono::NaiveDate;
use daily_core::{Context, FrameRange};

/// The four text fragments burned into a daily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlateText {
    /// Top-left burn-in: project and entity.
    pub top_left: String,
    /// Top-right burn-in: date.
    pub top_right: String,
    /// Bottom-left burn-in: submission name, iteration and artist.
    pub bottom_left: String,
    /// Full slate frame body.
    pub slate: String,
}

/// Formats the slate and burn-in fragments for one daily.
///
/// Layout rules:
///
/// - the entity line is omitted when the context has no bound entity
///   (batch or project-level session);
/// - the slate shows the task, falling back to the pipeline step when no
///   task is bound, and omits the line when neither is present;
/// - a missing tracking user is shown as `"Unknown User"`.
///
/// Pure formatting; no host state is touched.
pub fn format_slate(
    context: &Context,
    range: FrameRange,
    name: &str,
    iteration: i64,
    user: Option<&str>,
    date: NaiveDate,
) -> SlateText {
    // Project XYZ
    // Shot ABC
    let mut top_left = context.project.name.clone();
    if let Some(entity) = &context.entity {
        let _ = write!(top_left, "\n{} {}", entity.kind, entity.name);
    }

    // '23 Jan 2012' is universally understood.
    let top_right = date.format("%d %b %Y").to_string();

    // Name#increment
    // User
    let bottom_left = format!(
        "{name}#{iteration}\n{}",
        user.unwrap_or("Unknown User")
    );

    let mut slate = format!("Project: {}\n", context.project.name);
    if let Some(entity) = &context.entity {
        let _ = writeln!(slate, "{}: {}", entity.kind, entity.name);
    }
    let _ = writeln!(slate, "Name: {name}");
    let _ = writeln!(slate, "Iteration: {iteration}");
    if let Some(task) = &context.task {
        let _ = writeln!(slate, "Task: {}", task.name);
    } else if let Some(step) = &context.step {
        let _ = writeln!(slate, "Step: {}", step.name);
    }
    let _ = writeln!(slate, "Frames: {} - {}", range.first(), range.last());

    SlateText {
        top_left,
        top_right,
        bottom_left,
        slate,
    }
}
