//! Post-submission hooks.
//!
//! Studios bolt site-specific behavior onto the end of the pipeline:
//! publishing to a playlist, poking a message bus, copying the movie to a
//! review share. Hooks are registered by name and invoked, in configured
//! order, after the version record exists. A hook failure propagates
//! immediately; it is not retried, and later hooks do not run.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::{TrackError, TrackResult};

/// What a post hook gets to see.
#[derive(Debug, Clone, Copy)]
pub struct HookContext<'a> {
    /// The rendered movie on disk.
    pub movie_path: &'a Path,
    /// Id of the created review version.
    pub version_id: i64,
    /// The artist's comment.
    pub comment: &'a str,
}

/// Error type hooks report; wrapped into [`TrackError::Hook`] by the
/// registry.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// A named piece of site-specific post-submission behavior.
pub trait PostHook {
    /// Runs the hook.
    fn execute(&mut self, ctx: &HookContext<'_>) -> Result<(), HookError>;
}

/// Registry of post hooks by name.
#[derive(Default)]
pub struct HookRegistry {
    hooks: HashMap<String, Box<dyn PostHook>>,
}

impl HookRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook under a name.
    ///
    /// Re-registering a name replaces the previous hook.
    pub fn register(&mut self, name: impl Into<String>, hook: Box<dyn PostHook>) {
        self.hooks.insert(name.into(), hook);
    }

    /// Returns true if a hook is registered under the name.
    pub fn is_registered(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Runs the named hooks in order.
    ///
    /// A configured name with no registered implementation is an error; a
    /// failing hook stops the run and its error propagates.
    pub fn run(&mut self, names: &[String], ctx: &HookContext<'_>) -> TrackResult<()> {
        for name in names {
            let hook = self
                .hooks
                .get_mut(name)
                .ok_or_else(|| TrackError::UnknownHook(name.clone()))?;
            debug!(hook = %name, version_id = ctx.version_id, "running post hook");
            hook.execute(ctx).map_err(|source| TrackError::Hook {
                name: name.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
