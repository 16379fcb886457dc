//! HTTP server module for the student records service.
//!
//! This module provides an axum-based HTTP server that exposes the service
//! layer and repository pattern from [`crate::db`] as a REST API.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Request parsing                                        │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error-to-status mapping             │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (db/services.rs)                           │
//! │  - Validation, id preservation                            │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Repository Layer (db/)                                   │
//! │  - LocalRepository / FileRepository                       │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Endpoints
//!
//! | Method | Path              | Success | Errors        |
//! |--------|-------------------|---------|---------------|
//! | GET    | `/students`       | 200     | 500           |
//! | GET    | `/students/{id}`  | 200     | 404, 500      |
//! | POST   | `/students`       | 201     | 400, 500      |
//! | PUT    | `/students/{id}`  | 200     | 400, 404, 500 |
//! | DELETE | `/students/{id}`  | 204     | 404, 500      |
//! | GET    | `/health`         | 200     |               |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::{ApiError, AppError};
pub use router::create_router;
pub use state::AppState;
