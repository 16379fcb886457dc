//! Repository trait definitions for student storage.
//!
//! # Module Organization
//!
//! - [`error`]: Error types for repository operations
//! - [`student`]: CRUD operations on student records
//!
//! Handlers and services hold the repository as `Arc<dyn StudentRepository>`,
//! so any backend can be swapped in at startup.

pub mod error;
pub mod student;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};
pub use student::StudentRepository;
