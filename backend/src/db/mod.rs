//! Storage module for student records.
//!
//! This module provides abstractions for persistence via the Repository pattern,
//! allowing different storage backends to be swapped easily.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API)                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs) - Business Rules           │
//! │  - Record validation                                     │
//! │  - Id preservation on update                             │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴────────────────┐
//!     │                                 │
//! ┌───▼──────────────┐     ┌──────────▼──────────────┐
//! │ Local Repository │     │ File Repository         │
//! │ (in-memory)      │     │ (JSON snapshot)         │
//! └──────────────────┘     └─────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```no_run
//! use student_api::db::{services, RepositoryFactory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = RepositoryFactory::from_env()?;
//!     let students = services::list_students(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod services;


pub use services::{
    create_student, delete_student, get_student, health_check, list_students, update_student,
};

pub use factory::{RepositoryBuilder, RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
#[cfg(feature = "file-repo")]
pub use repositories::FileRepository;
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, StudentRepository};

use anyhow::{Context, Result};
use log::info;
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn StudentRepository>> = OnceLock::new();

/// Pick the backend for this process.
///
/// Priority: explicit config file > `repository.toml` in a standard location >
/// environment variables. A `repository.toml` that exists but is unreadable or
/// malformed is an error; environment variables only apply when none is found.
pub fn create_selected_repository(
    config_path: Option<&Path>,
) -> RepositoryResult<Arc<dyn StudentRepository>> {
    if let Some(path) = config_path {
        info!("Loading repository config from {}", path.display());
        return RepositoryFactory::from_config_file(path);
    }

    match RepositoryConfig::from_default_location()? {
        Some(config) => RepositoryFactory::from_repository_config(&config),
        None => RepositoryFactory::from_env(),
    }
}

/// Initialize the global repository singleton.
///
/// Later calls are no-ops once a repository is set.
pub fn init_repository(config_path: Option<&Path>) -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository(config_path)
        .context("Failed to initialize student repository")?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn StudentRepository>> {
    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
