//! Course repository trait.
//!
//! The narrow storage interface the HTTP layer depends on. Each method maps to
//! exactly one storage round trip; implementations never retry.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::{Course, CourseId, CourseSummary, NewCourse};

/// Repository trait for course persistence.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to be shared across request handlers.
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Check if the database connection is healthy.
    ///
    /// # Returns
    /// - `Ok(true)` if connection is healthy
    /// - `Ok(false)` if connection is unhealthy but no error occurred
    /// - `Err(RepositoryError)` if an error occurred during the check
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List every course, projected to id and title, in insertion order.
    ///
    /// An empty store yields an empty vector.
    async fn list_courses(&self) -> RepositoryResult<Vec<CourseSummary>>;

    /// Fetch a single course.
    ///
    /// # Returns
    /// * `Ok(Some(Course))` - The course with its description
    /// * `Ok(None)` - No course has this id
    /// * `Err(RepositoryError)` - The storage layer failed
    async fn get_course(&self, id: CourseId) -> RepositoryResult<Option<Course>>;

    /// Persist a validated course and return the identifier the store assigned.
    async fn insert_course(&self, course: &NewCourse) -> RepositoryResult<CourseId>;
}
