//! Data Transfer Objects for the HTTP API.
//!
//! Field names follow the wire format (`courseId`, not `course_id`).

use serde::{Deserialize, Serialize};

use crate::models::{Course, CourseId, CourseSummary};

/// Body of `GET /courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseSummary>,
}

/// Body of `GET /courses/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseResponse {
    pub course: Course,
}

/// Body of a successful `POST /courses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseResponse {
    pub course_id: CourseId,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the service
    pub version: String,
    /// Database connection status
    pub database: String,
}
