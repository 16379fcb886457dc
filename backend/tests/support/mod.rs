#![allow(dead_code)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use student_api::models::Student;

#[cfg(feature = "http-server")]
pub use http_support::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

/// Runs `f` with the process working directory set to `dir`.
///
/// Shares the env lock, since the working directory is process-global too.
pub fn with_current_dir<F, R>(dir: &Path, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir).unwrap();
    let _guard = RestoreDir(previous);
    f()
}

struct RestoreDir(PathBuf);

impl Drop for RestoreDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.0);
    }
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

pub fn ada() -> Student {
    Student::new("s1", "Ada Lovelace", "Mathematics", 3.9)
}

pub fn grace() -> Student {
    Student::new("s2", "Grace Hopper", "Computer Science", 3.8)
}

#[cfg(feature = "http-server")]
mod http_support {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use serde_json::Value;
    use tower::ServiceExt;

    use student_api::db::repositories::LocalRepository;
    use student_api::http::{create_router, AppState};
    use student_api::models::Student;

    /// Router over a local repository seeded with `students`.
    ///
    /// The repository handle is returned so tests can inspect or break it.
    pub fn app_with(students: Vec<Student>) -> (Router, LocalRepository) {
        let repo = LocalRepository::with_students(students);
        let router = create_router(AppState::new(Arc::new(repo.clone())));
        (router, repo)
    }

    /// Send one request through the router and decode the JSON response.
    ///
    /// An empty body decodes to `Value::Null`.
    pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = match body {
            Some(json) => Request::builder()
                .method(method)
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => Request::builder().method(method).uri(uri).body(Body::empty()),
        }
        .unwrap();

        send_request(app, request).await
    }

    pub async fn send_request(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}
