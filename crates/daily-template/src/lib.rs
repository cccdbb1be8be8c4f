//! # daily-template
//!
//! Named-field path templates for quick-daily renders.
//!
//! Render outputs live at templated paths like
//! `dailies/{name}/{name}_{iteration:03d}.mov`. This crate provides:
//!
//! - [`PathTemplate`] - parse a pattern, apply field values to produce a
//!   concrete path, validate a path against the pattern, and extract field
//!   values back out of a matching path
//! - [`resolve_next_iteration`] - scan existing renders on disk and compute
//!   the next free iteration number for a (name, version) pair
//!
//! # Template Syntax
//!
//! - `{name}` - string field, matches any run of non-separator characters
//! - `{iteration:03d}` - integer field, zero-padded to 3 digits
//! - `{iteration:d}` - integer field, no padding
//!
//! # Example
//!
//! ```rust
//! use daily_template::{FieldValue, PathTemplate, TemplateFields};
//!
//! let template = PathTemplate::parse("dailies/{name}_{iteration:03d}.mov").unwrap();
//!
//! let mut fields = TemplateFields::new();
//! fields.insert("name".to_string(), FieldValue::from("compA"));
//! fields.insert("iteration".to_string(), FieldValue::from(3));
//!
//! let path = template.apply(&fields).unwrap();
//! assert_eq!(path.to_str().unwrap(), "dailies/compA_003.mov");
//!
//! let extracted = template.extract(&path).unwrap();
//! assert_eq!(extracted["iteration"], FieldValue::Int(3));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod fields;
pub mod iteration;
pub mod template;

pub use error::{TemplateError, TemplateResult};
pub use fields::{FieldValue, TemplateFields};
pub use iteration::{ITERATION_FIELD, resolve_next_iteration};
pub use template::PathTemplate;
