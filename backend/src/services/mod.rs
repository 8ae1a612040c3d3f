//! Business rules applied before anything reaches storage.

pub mod validation;

pub use validation::{validate_new_course, CourseField, FieldError, ValidationErrors};
