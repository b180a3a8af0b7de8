//! Infrastructure layer for the task API.
//!
//! - [`config`]: environment-variable configuration
//! - [`store`]: the `TaskStore` trait with SQLite and in-memory backends
//! - [`dependencies`]: the dependency container handed to the router

pub mod config;
pub mod dependencies;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use store::{InMemoryTaskStore, SqliteTaskStore, TaskStore, TaskStoreError};
