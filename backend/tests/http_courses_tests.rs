//! End-to-end tests of the course routes through the full axum router.

#![cfg(all(feature = "http-server", feature = "local-repo"))]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use course_service::db::repositories::LocalRepository;
use course_service::http::{create_router, AppState};
use course_service::models::CourseId;

fn app(repo: &LocalRepository) -> Router {
    create_router(AppState::new(Arc::new(repo.clone())))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/courses")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn course_id_of(body: &Value) -> String {
    body["courseId"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_course_returns_created_with_uuid() {
    let repo = LocalRepository::new();
    let (status, body) = post_json(
        app(&repo),
        json!({ "title": "Intro to Systems", "description": "basics" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = course_id_of(&body);
    assert!(CourseId::parse(&id).is_some());
    assert_eq!(body.as_object().unwrap().len(), 1);
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_short_title_is_rejected() {
    let repo = LocalRepository::new();
    let (status, body) = post_json(app(&repo), json!({ "title": "Hi" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Title is required" }));
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_missing_title_is_rejected() {
    let repo = LocalRepository::new();
    let (status, body) = post_json(app(&repo), json!({ "description": "orphan" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title is required");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_bad_description_type_is_rejected() {
    let repo = LocalRepository::new();
    let (status, body) =
        post_json(app(&repo), json!({ "title": "Database Design", "description": 42 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Description must be a string or null");
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_with_nul_character_is_rejected() {
    let repo = LocalRepository::new();
    let (status, body) = post_json(app(&repo), json!({ "title": "\u{0}abcde" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title is required");

    let (status, _) = post_json(
        app(&repo),
        json!({ "title": "Database Design", "description": "nul\u{0}byte" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let repo = LocalRepository::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/courses")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"title\": "))
        .unwrap();
    let (status, body) = send(app(&repo), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_create_without_json_content_type_is_bad_request() {
    let repo = LocalRepository::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/courses")
        .body(Body::from(json!({ "title": "Intro to Systems" }).to_string()))
        .unwrap();
    let (status, body) = send(app(&repo), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
    assert!(repo.is_empty());
}

#[tokio::test]
async fn test_get_unknown_course_is_not_found() {
    let repo = LocalRepository::new();
    let (status, body) = get(app(&repo), "/courses/does-not-exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "Course not found." }));
}

#[tokio::test]
async fn test_get_never_inserted_uuid_is_not_found() {
    let repo = LocalRepository::new();
    let (status, body) = get(
        app(&repo),
        "/courses/6f1c8a52-3a4e-4d55-9a0e-0b7d9b1f2c11",
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course not found.");
}

#[tokio::test]
async fn test_get_returns_full_course() {
    let repo = LocalRepository::new();
    let (_, created) = post_json(
        app(&repo),
        json!({ "title": "Intro to Systems", "description": "basics" }),
    )
    .await;
    let id = course_id_of(&created);

    let (status, body) = get(app(&repo), &format!("/courses/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "course": { "id": id, "title": "Intro to Systems", "description": "basics" } })
    );
}

#[tokio::test]
async fn test_omitted_description_reads_back_as_null() {
    let repo = LocalRepository::new();
    let (status, created) = post_json(app(&repo), json!({ "title": "Advanced JavaScript" })).await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(app(&repo), &format!("/courses/{}", course_id_of(&created))).await;
    assert_eq!(body["course"]["description"], Value::Null);
    assert!(body["course"].as_object().unwrap().contains_key("description"));
}

#[tokio::test]
async fn test_empty_description_is_not_absence() {
    let repo = LocalRepository::new();
    let (_, created) = post_json(
        app(&repo),
        json!({ "title": "Advanced JavaScript", "description": "" }),
    )
    .await;

    let (_, body) = get(app(&repo), &format!("/courses/{}", course_id_of(&created))).await;
    assert_eq!(body["course"]["description"], "");
}

#[tokio::test]
async fn test_list_empty_store() {
    let repo = LocalRepository::new();
    let (status, body) = get(app(&repo), "/courses").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "courses": [] }));
}

#[tokio::test]
async fn test_list_projects_id_and_title_only() {
    let repo = LocalRepository::new();
    let (_, first) = post_json(
        app(&repo),
        json!({ "title": "Introduction to Programming", "description": "first" }),
    )
    .await;
    let (_, second) = post_json(app(&repo), json!({ "title": "Database Design" })).await;

    let (status, body) = get(app(&repo), "/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "courses": [
            { "id": course_id_of(&first), "title": "Introduction to Programming" },
            { "id": course_id_of(&second), "title": "Database Design" },
        ] })
    );
}

#[tokio::test]
async fn test_list_is_stable_without_writes() {
    let repo = LocalRepository::new();
    post_json(app(&repo), json!({ "title": "Introduction to Programming" })).await;
    post_json(app(&repo), json!({ "title": "Advanced JavaScript" })).await;

    let (_, once) = get(app(&repo), "/courses").await;
    let (_, twice) = get(app(&repo), "/courses").await;
    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_storage_fault_is_internal_error() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    let (status, body) = get(app(&repo), "/courses").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error" }));

    let (status, _) = get(
        app(&repo),
        "/courses/6f1c8a52-3a4e-4d55-9a0e-0b7d9b1f2c11",
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _) = post_json(app(&repo), json!({ "title": "Intro to Systems" })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_validation_runs_before_storage() {
    let repo = LocalRepository::new();
    repo.set_healthy(false);

    // An invalid body is rejected even though storage would fail.
    let (status, _) = post_json(app(&repo), json!({ "title": "Hi" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_endpoint() {
    let repo = LocalRepository::new();
    let (status, body) = get(app(&repo), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "connected");
}

#[tokio::test]
async fn test_unsupported_method_is_rejected() {
    let repo = LocalRepository::new();
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/courses")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app(&repo), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
