//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer in [`crate::db::services`].

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{Method, StatusCode, Uri},
    Json,
};

use super::dto::{HealthResponse, Student};
use super::error::AppError;
use super::state::AppState;
use crate::db::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the service is up and the repository is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository,
    }))
}

// =============================================================================
// Student CRUD
// =============================================================================

/// GET /students
pub async fn list_students(State(state): State<AppState>) -> HandlerResult<Vec<Student>> {
    let students = services::list_students(state.repository.as_ref()).await?;
    Ok(Json(students))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> HandlerResult<Student> {
    let student = services::get_student(state.repository.as_ref(), &id).await?;
    Ok(Json(student))
}

/// POST /students
///
/// Validates the body and stores it. Responds `201 Created` with the stored record.
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<Student>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), AppError> {
    let Json(student) = payload?;
    let created = services::create_student(state.repository.as_ref(), student).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /students/{id}
///
/// Replaces every field of the stored record. The body must be a complete
/// record; the path id is kept even if the body names another one.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Student>, JsonRejection>,
) -> HandlerResult<Student> {
    let Json(student) = payload?;
    let updated = services::update_student(state.repository.as_ref(), &id, student).await?;
    Ok(Json(updated))
}

/// DELETE /students/{id}
///
/// Responds `204 No Content` on success.
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    services::delete_student(state.repository.as_ref(), &id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unknown routes.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// Fallback for known routes called with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}
