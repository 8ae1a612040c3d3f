//! High-level database service layer.
//!
//! Repository-agnostic entry points used by the HTTP handlers. They add
//! logging around the repository calls and nothing else: no retries, no
//! caching, no rewriting of storage errors.
//!
//! # Usage
//!
//! ```no_run
//! use course_service::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let courses = services::list_courses(&repo).await?;
//!     println!("Found {} courses", courses.len());
//!     Ok(())
//! }
//! ```

use log::{debug, info};

use super::repository::{CourseRepository, RepositoryResult};
use crate::models::{Course, CourseId, CourseSummary, NewCourse};

/// Check if the database connection is healthy.
pub async fn health_check<R: CourseRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List every course as `{id, title}`.
pub async fn list_courses<R: CourseRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<CourseSummary>> {
    let courses = repo.list_courses().await?;
    debug!("Listed {} courses", courses.len());
    Ok(courses)
}

/// Fetch one course; `Ok(None)` when no course has this id.
pub async fn get_course<R: CourseRepository + ?Sized>(
    repo: &R,
    id: CourseId,
) -> RepositoryResult<Option<Course>> {
    let course = repo.get_course(id).await?;
    if course.is_none() {
        debug!("Course {} not found", id);
    }
    Ok(course)
}

/// Store a validated course and return the id assigned by the repository.
pub async fn create_course<R: CourseRepository + ?Sized>(
    repo: &R,
    course: &NewCourse,
) -> RepositoryResult<CourseId> {
    let id = repo.insert_course(course).await?;
    info!("Created course {} ('{}')", id, course.title());
    Ok(id)
}
