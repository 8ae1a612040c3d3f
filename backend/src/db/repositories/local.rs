//! In-memory local repository implementation.
//!
//! Suitable for unit testing and local development. Courses are kept in
//! insertion order with a by-id index next to them.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::repository::{CourseRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{Course, CourseId, CourseSummary, NewCourse};

/// In-memory local repository.
///
/// Cloning shares the underlying store.
///
/// # Example
/// ```
/// use course_service::db::repositories::LocalRepository;
///
/// let repo = LocalRepository::new();
/// assert!(repo.is_empty());
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            courses: Vec::new(),
            index: HashMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy, every course operation fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        *data = LocalData {
            is_healthy: data.is_healthy,
            ..Default::default()
        };
    }

    /// Get the number of courses stored.
    pub fn len(&self) -> usize {
        self.data.read().courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_healthy(data: &LocalData, operation: &str) -> RepositoryResult<()> {
        if data.is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection_with_context(
                "local repository is marked unhealthy",
                ErrorContext::new(operation).with_entity("course"),
            ))
        }
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CourseRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_courses(&self) -> RepositoryResult<Vec<CourseSummary>> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "list_courses")?;

        Ok(data
            .courses
            .iter()
            .map(|c| CourseSummary {
                id: c.id,
                title: c.title.clone(),
            })
            .collect())
    }

    async fn get_course(&self, id: CourseId) -> RepositoryResult<Option<Course>> {
        let data = self.data.read();
        Self::ensure_healthy(&data, "get_course")?;

        Ok(data.index.get(&id).map(|&pos| data.courses[pos].clone()))
    }

    async fn insert_course(&self, course: &NewCourse) -> RepositoryResult<CourseId> {
        let mut data = self.data.write();
        Self::ensure_healthy(&data, "insert_course")?;

        let id = CourseId::new(Uuid::new_v4());
        let position = data.courses.len();
        data.courses.push(Course {
            id,
            title: course.title().to_string(),
            description: course.description().map(str::to_string),
        });
        data.index.insert(id, position);

        Ok(id)
    }
}
