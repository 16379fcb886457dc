//! In-memory local repository implementation.
//!
//! All data lives in an ordered map behind a lock, which keeps tests fast,
//! deterministic and isolated. Nothing survives a restart.

use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use std::sync::Arc;

use super::table::StudentTable;
use crate::db::repository::{ErrorContext, RepositoryError, RepositoryResult, StudentRepository};
use crate::models::Student;

/// In-memory local repository.
///
/// Clones share the same underlying data.
///
/// # Example
/// ```no_run
/// use student_api::db::repositories::LocalRepository;
/// use student_api::db::repository::StudentRepository;
/// use student_api::models::Student;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let repo = LocalRepository::with_students(vec![Student::new("s1", "Ada", "Math", 3.9)]);
///     let students = repo.list_students().await?;
///     assert_eq!(students.len(), 1);
///     Ok(())
/// }
/// ```
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    students: StudentTable,
    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            students: StudentTable::default(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `students`.
    ///
    /// Later entries win when ids repeat.
    pub fn with_students(students: impl IntoIterator<Item = Student>) -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                students: StudentTable::from_students(students),
                is_healthy: true,
            })),
        }
    }

    /// Set the health status for testing connection failures.
    ///
    /// While unhealthy, every operation fails with a connection error.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        self.data.write().students.clear();
    }

    /// Number of stored students.
    pub fn len(&self) -> usize {
        self.data.read().students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn ensure_healthy(&self, operation: &str) -> RepositoryResult<()> {
        if self.data.read().is_healthy {
            Ok(())
        } else {
            Err(RepositoryError::connection_with_context(
                "Local repository is unavailable",
                ErrorContext::new(operation),
            ))
        }
    }
}

#[async_trait]
impl StudentRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_students(&self) -> RepositoryResult<Vec<Student>> {
        self.ensure_healthy("list_students")?;
        Ok(self.data.read().students.list())
    }

    async fn get_student(&self, id: &str) -> RepositoryResult<Student> {
        self.ensure_healthy("get_student")?;
        self.data.read().students.get(id)
    }

    async fn insert_student(&self, student: &Student) -> RepositoryResult<Student> {
        self.ensure_healthy("insert_student")?;
        let stored = self.data.write().students.insert(student)?;
        debug!("Inserted student id={}", stored.id);
        Ok(stored)
    }

    async fn replace_student(&self, student: &Student) -> RepositoryResult<Student> {
        self.ensure_healthy("replace_student")?;
        let stored = self.data.write().students.replace(student)?;
        debug!("Replaced student id={}", stored.id);
        Ok(stored)
    }

    async fn delete_student(&self, id: &str) -> RepositoryResult<()> {
        self.ensure_healthy("delete_student")?;
        self.data.write().students.remove(id)?;
        debug!("Deleted student id={}", id);
        Ok(())
    }
}
