//! Repository configuration file support.
//!
//! Reads the storage backend selection from a TOML file:
//!
//! ```toml
//! [repository]
//! type = "file"
//!
//! [file]
//! path = "data/students.json"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::RepositoryType;
use super::repository::{ErrorContext, RepositoryError};

/// Default snapshot location for the file repository.
pub const DEFAULT_STUDENTS_FILE: &str = "students.json";

/// Repository configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    pub repository: RepositorySettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Repository type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type")]
    pub repo_type: String,
}

/// File repository settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_students_file")]
    pub path: PathBuf,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: default_students_file(),
        }
    }
}

fn default_students_file() -> PathBuf {
    PathBuf::from(DEFAULT_STUDENTS_FILE)
}

impl RepositoryConfig {
    /// Load repository configuration from a TOML file.
    ///
    /// # Returns
    /// * `Ok(RepositoryConfig)` if successful
    /// * `Err(RepositoryError)` if file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let context =
            || ErrorContext::new("load_repository_config").with_details(path.display().to_string());

        let content = fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to read config file: {}", e),
                context(),
            )
        })?;

        let config: RepositoryConfig = toml::from_str(&content).map_err(|e| {
            RepositoryError::configuration_with_context(
                format!("Failed to parse config file: {}", e),
                context(),
            )
        })?;

        Ok(config)
    }

    /// Load repository configuration from the default location.
    ///
    /// Searches for `repository.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// Returns `Ok(None)` when no file exists in any of them. A file that is
    /// found but cannot be read or parsed is an error.
    pub fn from_default_location() -> Result<Option<Self>, RepositoryError> {
        let search_paths = [
            PathBuf::from("repository.toml"),
            PathBuf::from("backend/repository.toml"),
            PathBuf::from("../repository.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }

        Ok(None)
    }

    /// Get the repository type from configuration.
    pub fn repository_type(&self) -> Result<RepositoryType, RepositoryError> {
        RepositoryType::from_str(&self.repository.repo_type).map_err(|e| {
            RepositoryError::configuration(format!("Invalid repository type: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_local_config() {
        let toml = r#"
[repository]
type = "local"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.repository_type().unwrap(), RepositoryType::Local);
        assert_eq!(config.file.path, PathBuf::from(DEFAULT_STUDENTS_FILE));
    }

    #[test]
    fn test_parse_file_config() {
        let toml = r#"
[repository]
type = "json"

[file]
path = "/var/lib/students/records.json"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.repository_type().unwrap(), RepositoryType::File);
        assert_eq!(
            config.file.path,
            PathBuf::from("/var/lib/students/records.json")
        );
    }

    #[test]
    fn test_unknown_type_is_configuration_error() {
        let toml = r#"
[repository]
type = "postgres"
"#;

        let config: RepositoryConfig = toml::from_str(toml).unwrap();
        let err = config.repository_type().unwrap_err();
        assert!(matches!(err, RepositoryError::ConfigurationError { .. }));
    }

    #[test]
    fn test_from_file_reports_missing_and_malformed_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = RepositoryConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(missing.message().contains("Failed to read"));

        let bad = dir.path().join("repository.toml");
        fs::write(&bad, "[repository\n").unwrap();
        let err = RepositoryConfig::from_file(&bad).unwrap_err();
        assert!(err.message().contains("Failed to parse"));
    }
}
