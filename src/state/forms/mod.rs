//! Form domain layer
//!
//! Type-safe widget values for the builder page.

mod builder_form;
mod field;

pub use builder_form::{BuilderField, BuilderForm};
pub use field::FormField;
