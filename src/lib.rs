//! Taskboard
//!
//! A task-management REST API. Clients create, list, fetch, update, and
//! delete task records over HTTP; records are persisted in an embedded
//! SQLite store.
//!
//! # Architecture
//!
//! The crate follows a layered structure:
//!
//! - **Domain Layer**: the task record, its identifier, and the status
//!   filter classification
//! - **Application Layer**: the `TaskService` facade used by the transport
//!   layer
//! - **Infrastructure Layer**: configuration, the `TaskStore` trait and its
//!   SQLite and in-memory implementations, the dependency container
//! - **API Layer**: HTTP handlers, DTOs, error mapping, routes

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
