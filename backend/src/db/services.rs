//! High-level student service layer.
//!
//! Repository-agnostic operations used by the HTTP handlers. Business rules
//! live here so they hold for every storage backend:
//!
//! - records are validated before any write
//! - on update the id from the request path wins over the body
//!
//! # Usage
//!
//! ```no_run
//! use student_api::db::{services, repositories::LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = LocalRepository::new();
//!     let students = services::list_students(&repo).await?;
//!     println!("Found {} students", students.len());
//!     Ok(())
//! }
//! ```

use log::{info, warn};

use super::repository::{RepositoryError, RepositoryResult, StudentRepository};
use crate::models::Student;

/// Check if the repository is healthy.
pub async fn health_check<R: StudentRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// List every student.
pub async fn list_students<R: StudentRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<Student>> {
    repo.list_students().await
}

/// Fetch a single student by id.
pub async fn get_student<R: StudentRepository + ?Sized>(
    repo: &R,
    id: &str,
) -> RepositoryResult<Student> {
    repo.get_student(id).await
}

/// Validate and store a new student.
///
/// # Errors
/// * `ValidationError` if the record breaks a constraint
/// * `AlreadyExists` if the id is taken
pub async fn create_student<R: StudentRepository + ?Sized>(
    repo: &R,
    student: Student,
) -> RepositoryResult<Student> {
    if let Err(e) = student.validate() {
        warn!("Rejected new student id={:?}: {}", student.id, e);
        return Err(RepositoryError::from(e).with_operation("create_student"));
    }

    let stored = repo.insert_student(&student).await?;
    info!("Created student id={}", stored.id);
    Ok(stored)
}

/// Validate and fully replace the student stored under `id`.
///
/// The body must be a complete record, id included. The stored record always
/// carries the path `id`, whatever id the body names.
///
/// # Errors
/// * `ValidationError` if the record breaks a constraint
/// * `NotFound` if no student has this id
pub async fn update_student<R: StudentRepository + ?Sized>(
    repo: &R,
    id: &str,
    student: Student,
) -> RepositoryResult<Student> {
    if let Err(e) = student.validate() {
        warn!("Rejected update for student id={}: {}", id, e);
        return Err(RepositoryError::from(e).with_operation("update_student"));
    }

    let stored = repo.replace_student(&student.with_id(id)).await?;
    info!("Updated student id={}", stored.id);
    Ok(stored)
}

/// Remove the student stored under `id`.
pub async fn delete_student<R: StudentRepository + ?Sized>(
    repo: &R,
    id: &str,
) -> RepositoryResult<()> {
    repo.delete_student(id).await?;
    info!("Deleted student id={}", id);
    Ok(())
}
