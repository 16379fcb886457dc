//! Repository implementations module.
//!
//! This module contains the implementations of the `StudentRepository` trait:
//! - `local`: In-memory implementation for unit testing and local development
//! - `file`: JSON snapshot file implementation that survives restarts
pub mod local;
mod table;
#[cfg(feature = "file-repo")]
pub mod file;

pub use local::LocalRepository;
#[cfg(feature = "file-repo")]
pub use file::FileRepository;
