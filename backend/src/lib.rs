//! # Course Service
//!
//! A small REST service managing courses on top of relational storage.
//!
//! ## Architecture
//!
//! - [`models`]: the course entity, its list projection and the validated creation payload
//! - [`services`]: request payload validation
//! - [`db`]: repository trait, Postgres and in-memory backends, backend factory
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! Control flow for a request: router → handler → (validator) → repository →
//! response. Handlers hold no state of their own; everything lives in the
//! repository.

pub mod db;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
