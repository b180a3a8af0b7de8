//! Dependency container for the task API.
//!
//! Holds everything the handlers need: the loaded configuration and the
//! task service wired to a concrete store. The container is the axum
//! application state, so it is cheap to clone.

use std::sync::Arc;

use crate::application::tasks::TaskService;

use super::config::AppConfig;
use super::store::TaskStore;

/// Application dependency container.
///
/// The store is held behind a trait object so production and test wiring
/// differ only in what is passed to [`AppDependencies::new`].
#[derive(Clone)]
pub struct AppDependencies {
    config: AppConfig,
    tasks: TaskService,
}

impl AppDependencies {
    /// Creates a container wiring the task service to the given store.
    #[must_use]
    pub fn new(config: AppConfig, store: Arc<dyn TaskStore>) -> Self {
        Self {
            config,
            tasks: TaskService::new(store),
        }
    }

    /// Returns a reference to the application configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns a reference to the task service.
    #[must_use]
    pub const fn tasks(&self) -> &TaskService {
        &self.tasks
    }
}
