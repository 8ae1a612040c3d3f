//! Database module for course storage.
//!
//! Storage sits behind the [`CourseRepository`] trait so backends can be
//! swapped without touching the HTTP layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers                                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - logging around calls     │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                │
//! ┌───▼──────────────────┐   ┌─────────▼─────────────┐
//! │ Postgres Repository  │   │ Local Repository      │
//! │ (Diesel + r2d2)      │   │ (in-memory)           │
//! └──────────────────────┘   └───────────────────────┘
//! ```
//!
//! - `services`: entry points used by the HTTP layer
//! - `repository`: trait definition and error types
//! - `repositories::postgres`: Postgres implementation with Diesel ORM
//! - `repositories::local`: In-memory implementation for tests and local development
//! - `factory`: runtime backend selection

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
#[cfg(feature = "local-repo")]
pub use repositories::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use repositories::{PoolStats, PostgresConfig, PostgresRepository};
pub use repo_config::RepositoryConfig;
pub use repository::{CourseRepository, ErrorContext, RepositoryError, RepositoryResult};
