//! Student repository trait.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::models::Student;

/// Repository trait for student records.
///
/// Records are keyed by [`Student::id`]. Implementations do not validate the
/// record contents; that happens in the service layer before a write.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Check if the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// List every stored student, ordered by id.
    async fn list_students(&self) -> RepositoryResult<Vec<Student>>;

    /// Fetch a student by id.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if no student has this id.
    async fn get_student(&self, id: &str) -> RepositoryResult<Student>;

    /// Store a new student.
    ///
    /// # Errors
    /// `RepositoryError::ValidationError` if a student with the same id exists.
    async fn insert_student(&self, student: &Student) -> RepositoryResult<Student>;

    /// Replace the student stored under `student.id`.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if no student has this id.
    async fn replace_student(&self, student: &Student) -> RepositoryResult<Student>;

    /// Remove a student by id.
    ///
    /// # Errors
    /// `RepositoryError::NotFound` if no student has this id.
    async fn delete_student(&self, id: &str) -> RepositoryResult<()>;
}
