//! # Student API
//!
//! CRUD service for student records.
//!
//! A client creates, reads, replaces and deletes `Student` records over a JSON
//! REST API. Records are validated (non-empty id and name, GPA within
//! `[0.00, 4.00]`) before they reach storage, and repository failures map to
//! HTTP status codes: not found → 404, validation → 400, anything else → 500.
//!
//! ## Architecture
//!
//! - [`models`]: The `Student` record and its validation rules
//! - [`db`]: Repository pattern, storage backends and the service layer
//! - [`config`]: Server settings from the environment
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod config;
pub mod db;
pub mod models;

#[cfg(feature = "http-server")]
pub mod http;
