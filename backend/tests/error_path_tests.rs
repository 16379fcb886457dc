//! Error path testing for the HTTP error mapping and repository failures.
//!
//! A broken repository must surface as a 500 with a generic JSON body on every
//! student endpoint, while validation still wins over storage failures.

#![cfg(feature = "http-server")]

use axum::http::{Method, StatusCode};
use serde_json::json;

mod support;
use support::{ada, app_with, send};

#[tokio::test]
async fn test_unhealthy_repository_yields_500_everywhere() {
    let (app, repo) = app_with(vec![ada()]);
    repo.set_healthy(false);

    let body = json!({"id": "s9", "name": "Ok Name", "gpa": 3.0});
    let cases = [
        (Method::GET, "/students", None),
        (Method::GET, "/students/s1", None),
        (Method::POST, "/students", Some(body.clone())),
        (Method::PUT, "/students/s1", Some(body)),
        (Method::DELETE, "/students/s1", None),
    ];

    for (method, uri, payload) in cases {
        let (status, response) = send(&app, method.clone(), uri, payload).await;
        assert_eq!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR,
            "{} {} should fail with 500",
            method,
            uri
        );
        assert_eq!(response["code"], "INTERNAL_ERROR");
        assert_eq!(response["error"], "Internal server error");
    }
}

#[tokio::test]
async fn test_internal_error_body_hides_repository_details() {
    let (app, repo) = app_with(vec![]);
    repo.set_healthy(false);

    let (_, body) = send(&app, Method::GET, "/students", None).await;

    let text = body.to_string();
    assert!(!text.contains("Local repository"));
    assert!(!text.contains("operation="));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_validation_is_checked_before_storage() {
    let (app, repo) = app_with(vec![]);
    repo.set_healthy(false);

    let (status, _) = send(
        &app,
        Method::POST,
        "/students",
        Some(json!({"id": "s1", "name": "Ada", "gpa": 4.5})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_recovered_repository_serves_again() {
    let (app, repo) = app_with(vec![ada()]);
    repo.set_healthy(false);
    let (status, _) = send(&app, Method::GET, "/students/s1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    repo.set_healthy(true);
    let (status, body) = send(&app, Method::GET, "/students/s1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "s1");
}
