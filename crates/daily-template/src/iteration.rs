//! Next-iteration resolution for repeated daily renders.
//!
//! Iteration numbers for a given field set are monotonically increasing
//! integers starting at 1. The resolver is stateless: it derives the next
//! number purely from what is on disk at the time of the call. Two
//! concurrent sessions rendering the same name are not coordinated and can
//! collide on an iteration number.

use tracing::debug;

use crate::{FieldValue, PathTemplate, TemplateError, TemplateFields, TemplateResult};

/// Name of the template field that carries the iteration number.
pub const ITERATION_FIELD: &str = "iteration";

/// Computes the next available iteration number for a render.
///
/// All existing files matching the template with `iteration` left free are
/// enumerated and their iteration numbers extracted. The result is
/// `max + 1`, or `1` when no matching files exist (the first render).
/// Gaps in the existing numbers are ignored.
///
/// # Example
///
/// With `compA_001.mov`, `compA_003.mov` and `compA_005.mov` on disk, the
/// next iteration for `compA` is `6`.
pub fn resolve_next_iteration(
    template: &PathTemplate,
    fields: &TemplateFields,
) -> TemplateResult<i64> {
    if !template.has_field(ITERATION_FIELD) {
        return Err(TemplateError::UnknownField(ITERATION_FIELD.to_string()));
    }

    let existing = template.paths_matching(fields, &[ITERATION_FIELD])?;
    let mut latest = 0;
    for path in &existing {
        let Some(extracted) = template.extract(path) else {
            continue;
        };
        if let Some(FieldValue::Int(iteration)) = extracted.get(ITERATION_FIELD) {
            latest = latest.max(*iteration);
        }
    }

    debug!(
        existing = existing.len(),
        next = latest + 1,
        "resolved daily iteration"
    );
    Ok(latest + 1)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn template_in(dir: &Path) -> PathTemplate {
        let pattern = format!(
            "{}/dailies/{{name}}_{{iteration:03d}}.mov",
            dir.to_str().unwrap()
        );
        PathTemplate::parse(pattern).unwrap()
    }

    fn name_fields(name: &str) -> TemplateFields {
        let mut fields = TemplateFields::new();
        fields.insert("name".to_string(), FieldValue::from(name));
        fields
    }

    fn touch(dir: &Path, file: &str) {
        let path = dir.join("dailies").join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_first_render_is_iteration_one() {
        let dir = tempfile::tempdir().unwrap();
        let template = template_in(dir.path());
        assert_eq!(
            resolve_next_iteration(&template, &name_fields("compA")).unwrap(),
            1
        );
    }

    #[test]
    fn test_missing_directory_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // "dailies" was never created
        let template = template_in(&dir.path().join("nowhere"));
        assert_eq!(
            resolve_next_iteration(&template, &name_fields("compA")).unwrap(),
            1
        );
    }

    #[test]
    fn test_max_plus_one_ignores_gaps() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "compA_001.mov");
        touch(dir.path(), "compA_003.mov");
        touch(dir.path(), "compA_005.mov");
        let template = template_in(dir.path());
        assert_eq!(
            resolve_next_iteration(&template, &name_fields("compA")).unwrap(),
            6
        );
    }

    #[test]
    fn test_other_names_do_not_count() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "compA_001.mov");
        touch(dir.path(), "compB_009.mov");
        let template = template_in(dir.path());
        assert_eq!(
            resolve_next_iteration(&template, &name_fields("compA")).unwrap(),
            2
        );
    }

    #[test]
    fn test_non_matching_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "compA_001.mov");
        touch(dir.path(), "compA_junk.mov");
        touch(dir.path(), "compA_002.mov.tmp");
        let template = template_in(dir.path());
        assert_eq!(
            resolve_next_iteration(&template, &name_fields("compA")).unwrap(),
            2
        );
    }

    #[test]
    fn test_template_without_iteration_field() {
        let template = PathTemplate::parse("dailies/{name}.mov").unwrap();
        assert!(matches!(
            resolve_next_iteration(&template, &name_fields("compA")),
            Err(TemplateError::UnknownField(_))
        ));
    }
}
