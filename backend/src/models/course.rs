//! Course entity and its projections.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of characters a course title must have.
pub const MIN_TITLE_LEN: usize = 5;

/// Course identifier (database primary key).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub Uuid);

impl CourseId {
    pub fn new(value: Uuid) -> Self {
        CourseId(value)
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    /// Parse an identifier received as text, e.g. from a path segment.
    ///
    /// Returns `None` when the text is not a UUID; such a value can never
    /// name a stored course.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for CourseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(CourseId)
    }
}

impl From<Uuid> for CourseId {
    fn from(value: Uuid) -> Self {
        CourseId(value)
    }
}

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    /// `None` when the course was created without a description.
    pub description: Option<String>,
}

/// List projection of a course: identifier and title only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub title: String,
}

impl From<Course> for CourseSummary {
    fn from(course: Course) -> Self {
        Self {
            id: course.id,
            title: course.title,
        }
    }
}

/// A validated creation payload.
///
/// Only produced by [`crate::services::validation::validate_new_course`],
/// so holding one means the title rule has already been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    title: String,
    description: Option<String>,
}

impl NewCourse {
    pub(crate) fn new_unchecked(title: String, description: Option<String>) -> Self {
        Self { title, description }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn into_parts(self) -> (String, Option<String>) {
        (self.title, self.description)
    }
}
