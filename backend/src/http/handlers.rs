//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates storage work to
//! the db service layer.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::{debug, info};

use super::dto::{CourseListResponse, CourseResponse, CreateCourseResponse, HealthResponse};
use super::error::{AppError, COURSE_NOT_FOUND};
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::CourseId;
use crate::services::validation::validate_new_course;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and database is accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: db_status,
    }))
}

// =============================================================================
// Courses
// =============================================================================

/// GET /courses
///
/// List all courses as `{id, title}`.
pub async fn list_courses(State(state): State<AppState>) -> HandlerResult<CourseListResponse> {
    let courses = db_services::list_courses(state.repository.as_ref()).await?;
    Ok(Json(CourseListResponse { courses }))
}

/// GET /courses/{id}
///
/// Fetch one course. A path segment that is not a valid identifier cannot
/// match any course, so it is answered with 404 without a storage call.
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<CourseResponse> {
    let Some(course_id) = CourseId::parse(&id) else {
        debug!(id = %id, "malformed course id");
        return Err(AppError::NotFound(COURSE_NOT_FOUND.to_string()));
    };

    match db_services::get_course(state.repository.as_ref(), course_id).await? {
        Some(course) => Ok(Json(CourseResponse { course })),
        None => Err(AppError::NotFound(COURSE_NOT_FOUND.to_string())),
    }
}

/// POST /courses
///
/// Validate the body, store the course and return the id the repository
/// assigned. Invalid bodies never reach the repository.
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateCourseResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        debug!(error = %rejection, "unreadable course payload");
        AppError::from(rejection)
    })?;

    let new_course = validate_new_course(&payload).map_err(|errors| {
        debug!(error = %errors, "rejected course payload");
        AppError::from(errors)
    })?;

    let course_id = db_services::create_course(state.repository.as_ref(), &new_course).await?;
    info!(course_id = %course_id, "course created");

    Ok((
        StatusCode::CREATED,
        Json(CreateCourseResponse { course_id }),
    ))
}
