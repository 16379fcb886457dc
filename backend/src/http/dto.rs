//! Data Transfer Objects for the HTTP API.
//!
//! Student bodies use [`crate::models::Student`] directly since it already
//! derives Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::models::Student;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Crate version
    pub version: String,
    /// Repository status ("connected", "disconnected" or "error: ...")
    pub repository: String,
}
