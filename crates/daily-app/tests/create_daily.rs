//! End-to-end pipeline tests driven through in-memory host and tracking
//! fakes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value, json};

use daily_app::{
    CommentDialog, DailiesApp, DailiesSettings, DailyOutcome, HostSession, SubmissionInput,
};
use daily_core::{Context, EntityRef, FrameRange, HostError, HostResult, HostVersion};
use daily_render::{CodecSettings, RenderTarget, SlateText};
use daily_track::{HookContext, HookError, HookRegistry, PostHook, TrackResult, TrackingClient};

struct FakeHost {
    notifications: Arc<Mutex<Vec<String>>>,
}

impl HostSession for FakeHost {
    fn frame_range(&self) -> HostResult<FrameRange> {
        Ok(FrameRange::new(1001, 1010))
    }

    fn views(&self) -> HostResult<Vec<String>> {
        // stereo session; the pipeline must pick the first view
        Ok(vec!["left".to_string(), "right".to_string()])
    }

    fn version(&self) -> HostVersion {
        "12.2v4".parse().unwrap()
    }

    fn paste_node_network(&mut self, _resource: &Path) -> HostResult<()> {
        Ok(())
    }

    fn notify(&self, message: &str) {
        self.notifications.lock().unwrap().push(message.to_string());
    }
}

struct FakeDialog {
    response: Option<SubmissionInput>,
    default_seen: Arc<Mutex<Option<String>>>,
}

impl CommentDialog for FakeDialog {
    fn prompt(&mut self, default_name: &str) -> HostResult<Option<SubmissionInput>> {
        *self.default_seen.lock().unwrap() = Some(default_name.to_string());
        Ok(self.response.clone())
    }
}

/// Render network fake: "renders" by writing the movie file and a handful
/// of frames of the intermediate sequence.
#[derive(Default)]
struct FakeTarget {
    movie_path: Option<PathBuf>,
    frames_path: Option<PathBuf>,
    slate: Option<SlateText>,
    resolution: Option<(u32, u32)>,
    file_type: Option<String>,
    view: Option<String>,
    range: Option<FrameRange>,
    enabled: bool,
    fail_execute: bool,
}

impl RenderTarget for FakeTarget {
    fn set_font(&mut self, _font: &Path) -> HostResult<()> {
        Ok(())
    }

    fn apply_slate(&mut self, slate: &SlateText) -> HostResult<()> {
        self.slate = Some(slate.clone());
        Ok(())
    }

    fn set_resolution(&mut self, width: u32, height: u32) -> HostResult<()> {
        self.resolution = Some((width, height));
        Ok(())
    }

    fn set_movie_path(&mut self, path: &Path) -> HostResult<()> {
        self.movie_path = Some(path.to_path_buf());
        Ok(())
    }

    fn set_frames_path(&mut self, path: &Path) -> HostResult<()> {
        self.frames_path = Some(path.to_path_buf());
        Ok(())
    }

    fn set_codec(&mut self, settings: &CodecSettings) -> HostResult<()> {
        self.file_type = Some(settings.file_type.to_string());
        Ok(())
    }

    fn set_enabled(&mut self, enabled: bool) -> HostResult<()> {
        self.enabled = enabled;
        Ok(())
    }

    fn execute(&mut self, range: FrameRange, view: &str) -> HostResult<()> {
        self.range = Some(range);
        self.view = Some(view.to_string());
        if self.fail_execute {
            return Err(HostError::render_failed("write node error"));
        }

        let movie = self.movie_path.as_ref().expect("movie path set");
        fs::write(movie, b"mov").unwrap();

        let frames_dir = self.frames_path.as_ref().unwrap().parent().unwrap();
        for frame in 1..=3 {
            fs::write(frames_dir.join(format!("thumb_seq.{frame:08}.png")), b"png").unwrap();
        }
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeClient {
    created: Arc<Mutex<Vec<(String, Map<String, Value>)>>>,
    uploads: Arc<Mutex<Vec<(i64, String, PathBuf)>>>,
}

impl TrackingClient for FakeClient {
    fn current_user(&self) -> TrackResult<Option<EntityRef>> {
        Ok(Some(EntityRef::new("HumanUser", 7, "Jane Roe")))
    }

    fn create_record(
        &mut self,
        record_type: &str,
        fields: &Map<String, Value>,
    ) -> TrackResult<i64> {
        self.created
            .lock()
            .unwrap()
            .push((record_type.to_string(), fields.clone()));
        Ok(501)
    }

    fn upload(
        &mut self,
        _record_type: &str,
        id: i64,
        field: &str,
        path: &Path,
    ) -> TrackResult<()> {
        self.uploads
            .lock()
            .unwrap()
            .push((id, field.to_string(), path.to_path_buf()));
        Ok(())
    }
}

#[derive(Clone, Default)]
struct RecordingHook {
    calls: Arc<Mutex<Vec<(PathBuf, i64, String)>>>,
}

impl PostHook for RecordingHook {
    fn execute(&mut self, ctx: &HookContext<'_>) -> Result<(), HookError> {
        self.calls.lock().unwrap().push((
            ctx.movie_path.to_path_buf(),
            ctx.version_id,
            ctx.comment.to_string(),
        ));
        Ok(())
    }
}

fn shot_context() -> Context {
    Context {
        project: EntityRef::new("Project", 12, "Foo"),
        entity: Some(EntityRef::new("Shot", 34, "010")),
        task: None,
        step: None,
    }
}

struct Harness {
    app: DailiesApp,
    notifications: Arc<Mutex<Vec<String>>>,
    default_seen: Arc<Mutex<Option<String>>>,
    client: FakeClient,
    hook: RecordingHook,
}

fn harness(root: &Path, response: Option<SubmissionInput>) -> Harness {
    let settings = DailiesSettings {
        movie_template: format!(
            "{}/dailies/{{name}}_{{iteration:03d}}.mov",
            root.to_str().unwrap()
        ),
        width: 1024,
        height: 540,
        post_hooks: vec!["announce".to_string()],
        ..DailiesSettings::default()
    };

    let notifications = Arc::new(Mutex::new(Vec::new()));
    let default_seen = Arc::new(Mutex::new(None));
    let client = FakeClient::default();
    let hook = RecordingHook::default();

    let mut hooks = HookRegistry::new();
    hooks.register("announce", Box::new(hook.clone()));

    let app = DailiesApp::new(
        settings,
        shot_context(),
        Box::new(FakeHost {
            notifications: notifications.clone(),
        }),
        Box::new(FakeDialog {
            response,
            default_seen: default_seen.clone(),
        }),
        Box::new(client.clone()),
        hooks,
    )
    .unwrap();

    Harness {
        app,
        notifications,
        default_seen,
        client,
        hook,
    }
}

fn touch_existing(root: &Path, file: &str) {
    let path = root.join("dailies").join(file);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, b"").unwrap();
}

#[test]
fn create_daily_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    touch_existing(dir.path(), "compA_001.mov");
    touch_existing(dir.path(), "compA_002.mov");

    let mut h = harness(
        dir.path(),
        Some(SubmissionInput {
            name: "compA".to_string(),
            comment: "first pass".to_string(),
        }),
    );
    let mut target = FakeTarget::default();

    let outcome = h.app.create_daily(&mut target).unwrap();
    let DailyOutcome::Created(created) = outcome else {
        panic!("expected a created daily");
    };

    // iteration continues past the two existing renders
    assert_eq!(created.iteration, 3);
    assert_eq!(created.version_id, 501);
    assert!(created.movie_path.ends_with("dailies/compA_003.mov"));
    assert!(created.movie_path.is_file());

    // the dialog was pre-filled from the bound entity
    assert_eq!(h.default_seen.lock().unwrap().as_deref(), Some("010"));

    // render configuration
    assert_eq!(target.resolution, Some((1024, 540)));
    assert_eq!(target.view.as_deref(), Some("left"));
    assert_eq!(target.range, Some(FrameRange::new(1000, 1010)));
    assert!(!target.enabled);

    // slate content
    let slate = target.slate.unwrap();
    assert_eq!(slate.top_left, "Foo\nShot 010");
    assert_eq!(slate.bottom_left, "compA#3\nJane Roe");
    assert!(slate.slate.contains("Project: Foo"));
    assert!(slate.slate.contains("Shot: 010"));
    assert!(slate.slate.contains("Frames: 1001 - 1010"));

    // submission payload
    let created_records = h.client.created.lock().unwrap();
    let (record_type, fields) = &created_records[0];
    assert_eq!(record_type, "Version");
    assert_eq!(fields["code"], json!("compA#3"));
    assert_eq!(fields["description"], json!("first pass"));
    assert_eq!(fields["frame_count"], json!(10));
    assert_eq!(fields["frame_range"], json!("1001-1010"));
    assert_eq!(fields["entity"], json!({ "type": "Shot", "id": 34 }));
    assert_eq!(fields["user"], json!({ "type": "HumanUser", "id": 7 }));

    // movie and thumbnail uploads
    let uploads = h.client.uploads.lock().unwrap();
    assert!(
        uploads
            .iter()
            .any(|(id, field, path)| *id == 501
                && field == "sg_uploaded_movie"
                && path.ends_with("dailies/compA_003.mov"))
    );
    assert!(
        uploads
            .iter()
            .any(|(id, field, _)| *id == 501 && field == "thumb_image")
    );

    // post hook and user notification
    let hook_calls = h.hook.calls.lock().unwrap();
    assert_eq!(hook_calls.len(), 1);
    assert_eq!(hook_calls[0].1, 501);
    assert_eq!(hook_calls[0].2, "first pass");
    assert!(h.notifications.lock().unwrap()[0].contains("compA#3"));
}

#[test]
fn first_daily_starts_at_iteration_one() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = harness(
        dir.path(),
        Some(SubmissionInput {
            name: "compA".to_string(),
            comment: String::new(),
        }),
    );
    let mut target = FakeTarget::default();

    let DailyOutcome::Created(created) = h.app.create_daily(&mut target).unwrap() else {
        panic!("expected a created daily");
    };
    assert_eq!(created.iteration, 1);
    assert!(created.movie_path.ends_with("dailies/compA_001.mov"));
}

#[test]
fn cancelling_the_dialog_has_no_side_effects() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = harness(dir.path(), None);
    let mut target = FakeTarget::default();

    let outcome = h.app.create_daily(&mut target).unwrap();
    assert!(matches!(outcome, DailyOutcome::Cancelled));

    assert!(h.client.created.lock().unwrap().is_empty());
    assert!(h.client.uploads.lock().unwrap().is_empty());
    assert!(h.hook.calls.lock().unwrap().is_empty());
    assert!(h.notifications.lock().unwrap().is_empty());
    assert!(!dir.path().join("dailies").exists());
}

#[test]
fn render_failure_disables_sinks_and_skips_submission() {
    let dir = tempfile::tempdir().unwrap();
    let mut h = harness(
        dir.path(),
        Some(SubmissionInput {
            name: "compA".to_string(),
            comment: String::new(),
        }),
    );
    let mut target = FakeTarget {
        fail_execute: true,
        ..FakeTarget::default()
    };

    let result = h.app.create_daily(&mut target);
    assert!(result.is_err());
    assert!(!target.enabled);
    assert!(h.client.created.lock().unwrap().is_empty());
    assert!(h.hook.calls.lock().unwrap().is_empty());
}
