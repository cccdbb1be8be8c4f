//! Path template parsing, application and extraction.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::{FieldValue, TemplateError, TemplateFields, TemplateResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldKind {
    Str,
    Int { padding: usize },
}

impl FieldKind {
    fn expected(&self) -> &'static str {
        match self {
            FieldKind::Str => "a string",
            FieldKind::Int { .. } => "an integer",
        }
    }
}

#[derive(Debug, Clone)]
struct FieldSpec {
    name: String,
    kind: FieldKind,
}

#[derive(Debug, Clone)]
enum Segment {
    Literal(String),
    Field(usize),
}

/// A path pattern with named fields.
///
/// Supports the three operations of the templating contract: applying a
/// field mapping to produce a concrete path, validating a concrete path
/// against the pattern, and extracting field values from a matching path.
///
/// Paths are compared with forward-slash separators regardless of the
/// native separator, matching how the host writes output paths.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    pattern: String,
    segments: Vec<Segment>,
    fields: Vec<FieldSpec>,
    matcher: Regex,
}

impl PathTemplate {
    /// Parses a template pattern.
    ///
    /// Returns an error for unbalanced braces, empty or malformed field
    /// names, unsupported format specs, and repeated fields with
    /// conflicting specs.
    pub fn parse(pattern: impl Into<String>) -> TemplateResult<Self> {
        let pattern = pattern.into();
        let mut segments = Vec::new();
        let mut fields: Vec<FieldSpec> = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    let mut spec = String::new();
                    loop {
                        match chars.next() {
                            Some('}') => break,
                            Some('{') => {
                                return Err(TemplateError::parse(&pattern, "nested '{'"));
                            }
                            Some(c) => spec.push(c),
                            None => {
                                return Err(TemplateError::parse(&pattern, "unterminated '{'"));
                            }
                        }
                    }
                    let (name, kind) = parse_field_spec(&pattern, &spec)?;
                    let index = match fields.iter().position(|f| f.name == name) {
                        Some(index) => {
                            if fields[index].kind != kind {
                                return Err(TemplateError::parse(
                                    &pattern,
                                    format!("conflicting specs for field '{name}'"),
                                ));
                            }
                            index
                        }
                        None => {
                            fields.push(FieldSpec { name, kind });
                            fields.len() - 1
                        }
                    };
                    segments.push(Segment::Field(index));
                }
                '}' => {
                    return Err(TemplateError::parse(&pattern, "unmatched '}'"));
                }
                c => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        if fields.is_empty() {
            return Err(TemplateError::parse(&pattern, "no fields defined"));
        }

        let matcher = build_matcher(&segments, &fields)
            .map_err(|e| TemplateError::parse(&pattern, e.to_string()))?;

        Ok(Self {
            pattern,
            segments,
            fields,
            matcher,
        })
    }

    /// Returns the original pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the names of the fields the template defines.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns true if the template defines the named field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Applies a field mapping to produce a concrete path.
    ///
    /// Every field the template defines must be present with the right
    /// value kind; integer fields are zero-padded per their spec.
    pub fn apply(&self, fields: &TemplateFields) -> TemplateResult<PathBuf> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => out.push_str(lit),
                Segment::Field(index) => out.push_str(&self.render_field(*index, fields)?),
            }
        }
        Ok(PathBuf::from(out))
    }

    /// Returns true if the path matches the pattern.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        self.extract(path).is_some()
    }

    /// Extracts field values from a matching path.
    ///
    /// Returns `None` when the path does not match, including when a field
    /// that occurs more than once in the pattern captures disagreeing
    /// values.
    pub fn extract(&self, path: impl AsRef<Path>) -> Option<TemplateFields> {
        let normalized = normalize(path.as_ref());
        let caps = self.matcher.captures(&normalized)?;

        let mut out = TemplateFields::new();
        let mut group = 0;
        for segment in &self.segments {
            let Segment::Field(index) = segment else {
                continue;
            };
            group += 1;
            let text = caps.get(group)?.as_str();
            let spec = &self.fields[*index];
            let value = match spec.kind {
                FieldKind::Str => FieldValue::Str(text.to_string()),
                FieldKind::Int { .. } => FieldValue::Int(text.parse().ok()?),
            };
            match out.get(&spec.name) {
                Some(existing) if *existing != value => return None,
                _ => {
                    out.insert(spec.name.clone(), value);
                }
            }
        }
        Some(out)
    }

    /// Builds a filesystem glob pattern with the listed fields left free.
    pub fn scan_pattern(&self, fields: &TemplateFields, free: &[&str]) -> TemplateResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(lit) => out.push_str(&glob::Pattern::escape(lit)),
                Segment::Field(index) => {
                    let spec = &self.fields[*index];
                    if free.contains(&spec.name.as_str()) {
                        out.push('*');
                    } else {
                        let rendered = self.render_field(*index, fields)?;
                        out.push_str(&glob::Pattern::escape(&rendered));
                    }
                }
            }
        }
        Ok(out)
    }

    /// Enumerates existing files matching the template with the listed
    /// fields left free.
    ///
    /// A listing that finds nothing is not an error; the first render of a
    /// name legitimately has no pre-existing files. Unreadable directory
    /// entries are skipped.
    pub fn paths_matching(
        &self,
        fields: &TemplateFields,
        free: &[&str],
    ) -> TemplateResult<Vec<PathBuf>> {
        let pattern = self.scan_pattern(fields, free)?;
        let mut out = Vec::new();
        for entry in glob::glob(&pattern)? {
            let Ok(path) = entry else {
                continue;
            };
            if self.matches(&path) {
                out.push(path);
            }
        }
        tracing::debug!(pattern = %pattern, matches = out.len(), "scanned template paths");
        Ok(out)
    }

    fn render_field(&self, index: usize, fields: &TemplateFields) -> TemplateResult<String> {
        let spec = &self.fields[index];
        let value = fields
            .get(&spec.name)
            .ok_or_else(|| TemplateError::MissingField(spec.name.clone()))?;
        match (spec.kind, value) {
            (FieldKind::Str, FieldValue::Str(s)) => Ok(s.clone()),
            (FieldKind::Int { padding }, FieldValue::Int(i)) => {
                Ok(format!("{i:0width$}", width = padding))
            }
            (kind, _) => Err(TemplateError::FieldType {
                field: spec.name.clone(),
                expected: kind.expected(),
            }),
        }
    }
}

fn parse_field_spec(pattern: &str, spec: &str) -> TemplateResult<(String, FieldKind)> {
    let (name, format) = match spec.split_once(':') {
        Some((name, format)) => (name, Some(format)),
        None => (spec, None),
    };
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(TemplateError::parse(
            pattern,
            format!("bad field name '{name}'"),
        ));
    }
    let kind = match format {
        None => FieldKind::Str,
        Some("d") => FieldKind::Int { padding: 1 },
        Some(format) => {
            // zero-padded integer spec, printf style: 03d
            let padding = format
                .strip_suffix('d')
                .filter(|body| body.starts_with('0') && body.len() > 1)
                .and_then(|body| body[1..].parse::<usize>().ok())
                .ok_or_else(|| {
                    TemplateError::parse(
                        pattern,
                        format!("unsupported format spec '{format}' for field '{name}'"),
                    )
                })?;
            FieldKind::Int { padding }
        }
    };
    Ok((name.to_string(), kind))
}

fn build_matcher(segments: &[Segment], fields: &[FieldSpec]) -> Result<Regex, regex::Error> {
    let mut source = String::from("^");
    for segment in segments {
        match segment {
            Segment::Literal(lit) => source.push_str(&regex::escape(lit)),
            Segment::Field(index) => match fields[*index].kind {
                FieldKind::Str => source.push_str("([^/]+)"),
                FieldKind::Int { padding } => {
                    source.push_str(&format!("(\\d{{{padding},}})"));
                }
            },
        }
    }
    source.push('$');
    Regex::new(&source)
}

fn normalize(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
