//! HTTP server module.
//!
//! An axum-based REST API over the course repository.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Body parsing and validation                           │
//! │  - JSON serialization                                    │
//! │  - CORS, compression, error mapping                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (db::services)                            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db::repositories)                     │
//! │  - LocalRepository / PostgresRepository                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Endpoints
//!
//! | Method | Path            | Success                     | Errors   |
//! |--------|-----------------|-----------------------------|----------|
//! | GET    | `/courses`      | 200 `{courses: [{id, title}]}` | 500   |
//! | GET    | `/courses/{id}` | 200 `{course: {...}}`       | 404, 500 |
//! | POST   | `/courses`      | 201 `{courseId}`            | 400, 500 |
//! | GET    | `/health`       | 200 `{status, version, database}` |    |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
