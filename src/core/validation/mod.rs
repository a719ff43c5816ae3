//! Field validation
//!
//! Validators are plain closures over a field name and its value; the
//! [`FieldErrorState`] runs them over a draft and builds the aggregated
//! message shown when a submit is blocked.

pub mod state;
pub mod validators;

pub use state::{FieldErrorState, INCOMPLETE_PREFIX, ValidationFailure};
