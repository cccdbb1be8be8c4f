//! The daily-creation pipeline.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::{debug, info};

use daily_core::{Context, HostError, Platform};
use daily_render::{
    RenderJob, RenderTarget, execute_daily_render, format_slate, generate_review_images,
    select_codec,
};
use daily_template::{
    FieldValue, ITERATION_FIELD, PathTemplate, TemplateFields, resolve_next_iteration,
};
use daily_track::{HookContext, HookRegistry, TrackingClient, VersionRecord, submit};

use crate::{CommentDialog, DailiesSettings, DailyResult, HostSession};

/// Filename pattern of the intermediate frame sequence.
const FRAME_SEQ_PATTERN: &str = "thumb_seq.%08d.png";

/// How one daily-creation run ended.
#[derive(Debug)]
pub enum DailyOutcome {
    /// The user dismissed the comment dialog; nothing happened.
    Cancelled,
    /// A daily was rendered and submitted.
    Created(CreatedDaily),
}

/// Details of a successfully created daily.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedDaily {
    /// Id of the review version in the tracking system.
    pub version_id: i64,
    /// The rendered movie on disk.
    pub movie_path: PathBuf,
    /// The submission name.
    pub name: String,
    /// The iteration that was rendered.
    pub iteration: i64,
}

/// The quick-dailies application object.
///
/// Constructed once per session with every collaborator injected; the host
/// adapter registers its menu/node callbacks against this instance and
/// keeps the only reference. No global state is involved.
pub struct DailiesApp {
    settings: DailiesSettings,
    context: Context,
    template: PathTemplate,
    host: Box<dyn HostSession>,
    dialog: Box<dyn CommentDialog>,
    tracking: Box<dyn TrackingClient>,
    hooks: HookRegistry,
}

impl DailiesApp {
    /// Creates the application object.
    ///
    /// Fails when the settings' movie template does not parse; a broken
    /// template should surface at startup, not mid-pipeline.
    pub fn new(
        settings: DailiesSettings,
        context: Context,
        host: Box<dyn HostSession>,
        dialog: Box<dyn CommentDialog>,
        tracking: Box<dyn TrackingClient>,
        hooks: HookRegistry,
    ) -> DailyResult<Self> {
        let template = PathTemplate::parse(&settings.movie_template)?;
        Ok(Self {
            settings,
            context,
            template,
            host,
            dialog,
            tracking,
            hooks,
        })
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &DailiesSettings {
        &self.settings
    }

    /// Returns the session context.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// Pastes the pre-authored daily node network into the session.
    pub fn create_node(&mut self) -> DailyResult<()> {
        self.host.paste_node_network(&self.settings.node_network)?;
        Ok(())
    }

    /// Runs the full daily-creation flow against a pasted render network.
    ///
    /// Blocks on the modal comment dialog and on render completion.
    /// Cancelling the dialog aborts with no side effects. Render artifacts
    /// of a run that fails after rendering are left on disk.
    pub fn create_daily(&mut self, target: &mut dyn RenderTarget) -> DailyResult<DailyOutcome> {
        let default_name = self.default_name();
        let Some(input) = self.dialog.prompt(&default_name)? else {
            info!("daily creation cancelled");
            return Ok(DailyOutcome::Cancelled);
        };

        let range = self.host.frame_range()?;

        let mut fields = TemplateFields::new();
        for (key, value) in self.context.template_fields() {
            fields.insert(key.to_string(), FieldValue::from(value));
        }
        fields.insert("name".to_string(), FieldValue::from(input.name.clone()));

        let iteration = resolve_next_iteration(&self.template, &fields)?;
        fields.insert(ITERATION_FIELD.to_string(), FieldValue::from(iteration));
        let movie_path = self.template.apply(&fields)?;
        if let Some(parent) = movie_path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(movie = %movie_path.display(), iteration, "resolved daily output");

        let user = self.tracking.current_user()?;
        let slate = format_slate(
            &self.context,
            range,
            &input.name,
            iteration,
            user.as_ref().map(|u| u.name.as_str()),
            Local::now().date_naive(),
        );
        if let Some(font) = &self.settings.font {
            target.set_font(font)?;
        }
        target.apply_slate(&slate)?;

        // intermediate frames for thumbnail/filmstrip extraction
        let frames_dir = tempfile::tempdir()?;
        let frames_path = frames_dir.path().join(FRAME_SEQ_PATTERN);

        let view = self
            .host
            .views()?
            .into_iter()
            .next()
            .ok_or(HostError::NoViews)?;
        let codec = select_codec(Platform::current(), self.host.version());
        execute_daily_render(
            target,
            &RenderJob {
                movie_path: &movie_path,
                frames_path: &frames_path,
                resolution: (self.settings.width, self.settings.height),
                codec,
                range,
                view: &view,
            },
        )?;

        let images = generate_review_images(frames_dir.path());

        let record = VersionRecord {
            name: input.name.clone(),
            iteration,
            description: input.comment.clone(),
            project: self.context.project.clone(),
            entity: self.context.entity.clone(),
            task: self.context.task.clone(),
            user,
            range,
            movie_path: movie_path.clone(),
            thumbnail: images.thumbnail,
            filmstrip: images.filmstrip,
        };
        let version_id = submit(
            self.tracking.as_mut(),
            &record,
            self.settings.upload_movie,
        )?;

        self.hooks.run(
            &self.settings.post_hooks,
            &HookContext {
                movie_path: &movie_path,
                version_id,
                comment: &input.comment,
            },
        )?;

        let message = format!(
            "Daily {} submitted for review (version id {version_id}).",
            record.code()
        );
        self.host.notify(&message);
        info!(version_id, movie = %movie_path.display(), "daily created");

        Ok(DailyOutcome::Created(CreatedDaily {
            version_id,
            movie_path,
            name: input.name,
            iteration,
        }))
    }

    // Dialog pre-fill: the task name where one is bound, then the entity,
    // then a generic fallback.
    fn default_name(&self) -> String {
        if let Some(task) = &self.context.task {
            task.name.clone()
        } else if let Some(entity) = &self.context.entity {
            entity.name.clone()
        } else {
            "quickdaily".to_string()
        }
    }
}
