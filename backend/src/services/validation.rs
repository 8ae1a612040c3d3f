//! Validation of course creation payloads.
//!
//! The request body arrives as untyped JSON. Nothing downstream of this module
//! ever sees that JSON: handlers only act on the [`NewCourse`] returned by
//! [`validate_new_course`].
//!
//! Rules:
//! - the body must be a JSON object
//! - `title` must be a string of at least [`MIN_TITLE_LEN`] characters
//! - `description`, when present, must be a string or `null`
//! - neither string may contain a NUL character, which Postgres `TEXT`
//!   cannot store
//!
//! Unknown keys are ignored.

use serde_json::Value;

use crate::models::{NewCourse, MIN_TITLE_LEN};

/// Field of the creation payload a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseField {
    Body,
    Title,
    Description,
}

impl CourseField {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseField::Body => "body",
            CourseField::Title => "title",
            CourseField::Description => "description",
        }
    }

    /// Message shown to API clients when this field is rejected.
    pub fn client_message(&self) -> &'static str {
        match self {
            CourseField::Body => "Request body must be a JSON object",
            CourseField::Title => "Title is required",
            CourseField::Description => "Description must be a string or null",
        }
    }
}

/// A single rejected field and the reason.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {reason}", .field.as_str())]
pub struct FieldError {
    pub field: CourseField,
    pub reason: &'static str,
}

/// Every field that failed validation, in payload order.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid course payload: {}", summarize(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn has_field(&self, field: CourseField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// The message for the first rejected field.
    pub fn client_message(&self) -> &'static str {
        self.errors
            .first()
            .map(|e| e.field.client_message())
            .unwrap_or(CourseField::Body.client_message())
    }
}

/// Check a candidate creation payload and build a [`NewCourse`] from it.
///
/// Pure: no I/O, no side effects. All failing fields are reported together.
pub fn validate_new_course(payload: &Value) -> Result<NewCourse, ValidationErrors> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationErrors {
            errors: vec![FieldError {
                field: CourseField::Body,
                reason: "request body must be a JSON object",
            }],
        });
    };

    let mut errors = Vec::new();

    let title = match object.get("title") {
        Some(Value::String(t)) if t.contains('\0') => {
            errors.push(FieldError {
                field: CourseField::Title,
                reason: "title must not contain NUL characters",
            });
            None
        }
        Some(Value::String(t)) if t.chars().count() >= MIN_TITLE_LEN => Some(t.clone()),
        _ => {
            errors.push(FieldError {
                field: CourseField::Title,
                reason: "title too short or missing",
            });
            None
        }
    };

    let description = match object.get("description") {
        None | Some(Value::Null) => None,
        Some(Value::String(d)) if d.contains('\0') => {
            errors.push(FieldError {
                field: CourseField::Description,
                reason: "description must not contain NUL characters",
            });
            None
        }
        Some(Value::String(d)) => Some(d.clone()),
        Some(_) => {
            errors.push(FieldError {
                field: CourseField::Description,
                reason: "description must be a string or null",
            });
            None
        }
    };

    match title {
        Some(title) if errors.is_empty() => Ok(NewCourse::new_unchecked(title, description)),
        _ => Err(ValidationErrors { errors }),
    }
}
