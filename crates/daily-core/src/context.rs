//! Tracking-system context for the current session.
//!
//! The integration framework resolves the session's work area to a set of
//! tracking-system links (project, entity, task, step) before any daily is
//! created. The snapshot is read-only for the lifetime of the session.

use serde::{Deserialize, Serialize};

/// A link to a record in the production-tracking system.
///
/// Carries the record type, its id and its display name, which is all the
/// dailies pipeline ever needs: names go onto slates, (kind, id) pairs go
/// into submission payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    /// Record type, e.g. `"Project"`, `"Shot"`, `"Task"`.
    pub kind: String,
    /// Record id.
    pub id: i64,
    /// Display name.
    pub name: String,
}

impl EntityRef {
    /// Creates a new entity link.
    pub fn new(kind: impl Into<String>, id: i64, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            id,
            name: name.into(),
        }
    }
}

/// Read-only snapshot of the session's tracking context.
///
/// `entity`, `task` and `step` are all optional: a batch or project-level
/// session has no bound entity, and a work area may carry a task, a step,
/// both, or neither.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    /// The project this session belongs to.
    pub project: EntityRef,
    /// The entity (shot, asset, ...) the session is bound to, if any.
    pub entity: Option<EntityRef>,
    /// The task the session is bound to, if any.
    pub task: Option<EntityRef>,
    /// The pipeline step the session is bound to, if any.
    pub step: Option<EntityRef>,
}

impl Context {
    /// Creates a project-level context with no bound entity.
    pub fn project_level(project: EntityRef) -> Self {
        Self {
            project,
            entity: None,
            task: None,
            step: None,
        }
    }

    /// Returns the name components a path template may reference.
    ///
    /// Keys are the conventional template field names; absent links are
    /// simply not present in the returned list.
    pub fn template_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("project", self.project.name.clone())];
        if let Some(entity) = &self.entity {
            fields.push(("entity", entity.name.clone()));
        }
        if let Some(task) = &self.task {
            fields.push(("task", task.name.clone()));
        }
        if let Some(step) = &self.step {
            fields.push(("step", step.name.clone()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shot_context() -> Context {
        Context {
            project: EntityRef::new("Project", 12, "Foo"),
            entity: Some(EntityRef::new("Shot", 34, "010")),
            task: Some(EntityRef::new("Task", 56, "Comp")),
            step: None,
        }
    }

    #[test]
    fn test_template_fields() {
        let fields = shot_context().template_fields();
        assert_eq!(
            fields,
            vec![
                ("project", "Foo".to_string()),
                ("entity", "010".to_string()),
                ("task", "Comp".to_string()),
            ]
        );
    }

    #[test]
    fn test_project_level_has_no_entity() {
        let ctx = Context::project_level(EntityRef::new("Project", 1, "Foo"));
        assert!(ctx.entity.is_none());
        assert_eq!(ctx.template_fields().len(), 1);
    }
}
