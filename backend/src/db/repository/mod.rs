//! Repository trait definitions for database operations.
//!
//! - [`error`]: Error types for repository operations
//! - [`course`]: Course persistence operations

pub mod course;
pub mod error;

pub use course::CourseRepository;
pub use error::{ErrorContext, RepositoryError, RepositoryResult};
