//! Repository factory for dependency injection.
//!
//! Creates repository instances based on runtime configuration: an explicit
//! type, environment variables, or a `repository.toml` file.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use super::repo_config::{RepositoryConfig, DEFAULT_STUDENTS_FILE};
#[cfg(feature = "file-repo")]
use super::repositories::FileRepository;
use super::repositories::LocalRepository;
use super::repository::{RepositoryError, RepositoryResult, StudentRepository};

/// Repository type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory local repository
    Local,
    /// JSON snapshot file
    File,
}

impl FromStr for RepositoryType {
    type Err = String;

    /// Parse repository type from string.
    ///
    /// Accepts "local"/"memory" and "file"/"json", case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" | "memory" => Ok(Self::Local),
            "file" | "json" => Ok(Self::File),
            _ => Err(format!("Unknown repository type: {}", s)),
        }
    }
}

impl RepositoryType {
    /// Get repository type from the `REPOSITORY_TYPE` environment variable.
    ///
    /// Unset or unparsable values fall back to Local.
    pub fn from_env() -> Self {
        std::env::var("REPOSITORY_TYPE")
            .ok()
            .and_then(|val| val.parse().ok())
            .unwrap_or(Self::Local)
    }
}

/// Snapshot path from `STUDENTS_FILE`, or the default location.
pub fn students_file_from_env() -> PathBuf {
    std::env::var("STUDENTS_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STUDENTS_FILE))
}

/// Repository factory for creating repository instances.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use student_api::db::{RepositoryFactory, RepositoryType};
///
/// let repo = RepositoryFactory::create(RepositoryType::File, Some(Path::new("students.json")))?;
/// let local = RepositoryFactory::create_local();
/// # Ok::<(), student_api::db::RepositoryError>(())
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository instance based on type.
    ///
    /// `file_path` is only consulted for [`RepositoryType::File`] and defaults
    /// to `students.json`.
    pub fn create(
        repo_type: RepositoryType,
        file_path: Option<&Path>,
    ) -> RepositoryResult<Arc<dyn StudentRepository>> {
        match repo_type {
            RepositoryType::File => {
                let path = file_path
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_STUDENTS_FILE));
                Self::create_file(path)
            }
            RepositoryType::Local => Ok(Self::create_local()),
        }
    }

    /// Create an in-memory local repository.
    pub fn create_local() -> Arc<dyn StudentRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create a file-backed repository.
    #[cfg(feature = "file-repo")]
    pub fn create_file(path: impl Into<PathBuf>) -> RepositoryResult<Arc<dyn StudentRepository>> {
        Ok(Arc::new(FileRepository::open(path)?))
    }

    /// Create a file-backed repository.
    #[cfg(not(feature = "file-repo"))]
    pub fn create_file(path: impl Into<PathBuf>) -> RepositoryResult<Arc<dyn StudentRepository>> {
        let _ = path.into();
        Err(RepositoryError::configuration(
            "File repository feature not enabled",
        ))
    }

    /// Create repository from environment configuration.
    ///
    /// Reads `REPOSITORY_TYPE` and, for the file backend, `STUDENTS_FILE`.
    pub fn from_env() -> RepositoryResult<Arc<dyn StudentRepository>> {
        let path = students_file_from_env();
        Self::create(RepositoryType::from_env(), Some(path.as_path()))
    }

    /// Create repository from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(
        config_path: P,
    ) -> RepositoryResult<Arc<dyn StudentRepository>> {
        let config = RepositoryConfig::from_file(config_path)?;
        Self::from_repository_config(&config)
    }

    /// Create repository from the default configuration file location.
    pub fn from_default_config() -> RepositoryResult<Arc<dyn StudentRepository>> {
        let config = RepositoryConfig::from_default_location()?.ok_or_else(|| {
            RepositoryError::configuration("No repository.toml found in standard locations")
        })?;
        Self::from_repository_config(&config)
    }

    /// Create repository from a RepositoryConfig instance.
    pub fn from_repository_config(
        config: &RepositoryConfig,
    ) -> RepositoryResult<Arc<dyn StudentRepository>> {
        Self::create(config.repository_type()?, Some(config.file.path.as_path()))
    }
}

/// Builder for configuring repository creation.
///
/// # Example
/// ```no_run
/// use student_api::db::{RepositoryBuilder, RepositoryType};
///
/// let repo = RepositoryBuilder::new()
///     .repository_type(RepositoryType::File)
///     .file_path("data/students.json")
///     .build()?;
/// # Ok::<(), student_api::db::RepositoryError>(())
/// ```
pub struct RepositoryBuilder {
    repo_type: RepositoryType,
    file_path: Option<PathBuf>,
}

impl RepositoryBuilder {
    /// Create a new repository builder with default settings (Local).
    pub fn new() -> Self {
        Self {
            repo_type: RepositoryType::Local,
            file_path: None,
        }
    }

    /// Set the repository type.
    pub fn repository_type(mut self, repo_type: RepositoryType) -> Self {
        self.repo_type = repo_type;
        self
    }

    /// Set the snapshot path for the file backend.
    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env(mut self) -> Self {
        self.repo_type = RepositoryType::from_env();
        self.file_path = Some(students_file_from_env());
        self
    }

    /// Load configuration from a TOML file.
    pub fn from_config_file<P: AsRef<Path>>(
        self,
        config_path: P,
    ) -> Result<Self, RepositoryError> {
        let config = RepositoryConfig::from_file(config_path)?;
        self.apply(&config)
    }

    /// Load configuration from the default `repository.toml` location.
    pub fn from_default_config(self) -> Result<Self, RepositoryError> {
        let config = RepositoryConfig::from_default_location()?.ok_or_else(|| {
            RepositoryError::configuration("No repository.toml found in standard locations")
        })?;
        self.apply(&config)
    }

    fn apply(mut self, config: &RepositoryConfig) -> Result<Self, RepositoryError> {
        self.repo_type = config.repository_type()?;
        self.file_path = Some(config.file.path.clone());
        Ok(self)
    }

    /// Build the repository instance.
    pub fn build(self) -> RepositoryResult<Arc<dyn StudentRepository>> {
        RepositoryFactory::create(self.repo_type, self.file_path.as_deref())
    }
}

impl Default for RepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
