//! Library lending server
//!
//! Keeps books, members and borrowing records in memory and exposes them
//! through a REST JSON API, together with the borrow and return operations.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub repository: Repository,
    pub services: Arc<Services>,
}

impl AppState {
    /// Fresh state over an empty store
    pub fn new(config: AppConfig) -> Self {
        let repository = Repository::new();
        let services = Services::new(repository.clone());
        Self {
            config: Arc::new(config),
            repository,
            services: Arc::new(services),
        }
    }
}
