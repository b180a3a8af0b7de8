//! API layer for the task API.
//!
//! HTTP endpoints built on axum:
//!
//! - [`dto`]: request and response shapes, including field validation
//! - [`handlers`]: per-operation handlers
//! - [`middleware`]: error mapping and the rejection-aware body extractor
//! - [`routes`]: route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
