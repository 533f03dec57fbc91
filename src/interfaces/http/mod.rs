//! HTTP REST API interfaces
//!
//! - `common`: shared extractors (validated JSON)
//! - `error`: domain-error-to-status mapping and the JSON error body
//! - `modules`: request handlers, one module per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod error;
pub mod modules;
pub mod router;

pub use error::ApiError;
pub use router::create_api_router;
