//! End-to-end API tests: the real router and services over the
//! in-memory persistence layer. Guard redirects, role subtrees, and
//! the copy flow are exercised exactly as a client would.

mod support;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use content_hub::api::{create_router, AppState};
use content_hub::config::Config;
use content_hub::domain::{AccountStatus, AppRole};
use content_hub::infra::ContentFeed;
use content_hub::services::{
    Authenticator, BannerBoard, Catalog, ContentLibrary, ProfileManager, UserManager,
};

use support::InMemory;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn test_app() -> (Arc<InMemory>, Router) {
    let uow = InMemory::new();
    let feed = Arc::new(ContentFeed::new());
    let config = Config::for_tests(TEST_SECRET);

    let state = AppState::new(
        Arc::new(Authenticator::new(uow.clone(), config)),
        Arc::new(UserManager::new(uow.clone())),
        Arc::new(ProfileManager::new(uow.clone())),
        Arc::new(ContentLibrary::new(uow.clone(), feed.clone())),
        Arc::new(Catalog::new(uow.clone())),
        Arc::new(BannerBoard::new(uow.clone())),
        feed,
    );

    (uow, create_router(state))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    (status, body, location)
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn post_json(path: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn post(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

/// Register a user, optionally promote them, and return (id, token).
async fn provision(
    uow: &Arc<InMemory>,
    app: &Router,
    email: &str,
    role: Option<AppRole>,
    status: AccountStatus,
) -> (Uuid, String) {
    let (created, body, _) = send(
        app,
        post_json(
            "/auth/register",
            None,
            json!({
                "email": email,
                "password": "SecurePass123!",
                "full_name": "Test User"
            }),
        ),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    let id: Uuid = body["id"].as_str().unwrap().parse().unwrap();

    uow.with_world(|w| {
        if let Some(role) = role {
            w.roles.insert(id, role);
        }
        if let Some(profile) = w.profiles.iter_mut().find(|p| p.id == id) {
            profile.status = status;
        }
    });

    let (ok, body, _) = send(
        app,
        post_json(
            "/auth/login",
            None,
            json!({ "email": email, "password": "SecurePass123!" }),
        ),
    )
    .await;
    assert_eq!(ok, StatusCode::OK);

    (id, body["access_token"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn test_anonymous_profile_request_redirects_to_sign_in_with_location() {
    let (_, app) = test_app();

    let (status, _, location) = send(&app, get("/profile", None)).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/auth?from=%2Fprofile"));
}

#[tokio::test]
async fn test_anonymous_session_is_null() {
    let (_, app) = test_app();

    let (status, body, _) = send(&app, get("/auth/session", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["user"].is_null());
    assert!(body["role"].is_null());
}

#[tokio::test]
async fn test_locked_admin_is_denied_with_locked_reason() {
    let (uow, app) = test_app();
    let (_, token) = provision(
        &uow,
        &app,
        "admin@example.com",
        Some(AppRole::Admin),
        AccountStatus::Locked,
    )
    .await;

    // Locked wins over the role that would otherwise open /admin
    let (status, _, location) = send(&app, get("/admin/users", Some(&token))).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/access-denied?reason=locked"));
}

#[tokio::test]
async fn test_pending_editor_is_sent_to_waiting_room() {
    let (uow, app) = test_app();
    let (_, token) = provision(
        &uow,
        &app,
        "editor@example.com",
        Some(AppRole::Editor),
        AccountStatus::Pending,
    )
    .await;

    let (status, _, location) = send(&app, get("/editor/contents", Some(&token))).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/waiting-room"));
}

#[tokio::test]
async fn test_wrong_role_is_denied_with_role_reason() {
    let (uow, app) = test_app();
    let (_, token) = provision(
        &uow,
        &app,
        "sales@example.com",
        Some(AppRole::Sales),
        AccountStatus::Active,
    )
    .await;

    let (status, _, location) = send(&app, get("/admin/users", Some(&token))).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location.as_deref(), Some("/access-denied?reason=role"));
}

#[tokio::test]
async fn test_waiting_room_request_once_then_conflict() {
    let (uow, app) = test_app();
    let (_, token) = provision(
        &uow,
        &app,
        "pending@example.com",
        None,
        AccountStatus::Pending,
    )
    .await;

    let (first, _, _) = send(&app, post("/waiting-room/request", Some(&token))).await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body, _) = send(&app, post("/waiting-room/request", Some(&token))).await;
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_editor_draft_is_invisible_to_sales_until_admin_publishes() {
    let (uow, app) = test_app();
    let (editor_id, editor_token) = provision(
        &uow,
        &app,
        "editor@example.com",
        Some(AppRole::Editor),
        AccountStatus::Active,
    )
    .await;
    let (_, admin_token) = provision(
        &uow,
        &app,
        "admin@example.com",
        Some(AppRole::Admin),
        AccountStatus::Active,
    )
    .await;
    let (_, sales_token) = provision(
        &uow,
        &app,
        "sales@example.com",
        Some(AppRole::Sales),
        AccountStatus::Active,
    )
    .await;

    // Editor creates, asking (in vain) for published status
    let (created, body, _) = send(
        &app,
        post_json(
            "/editor/contents",
            Some(&editor_token),
            json!({ "title": "Draft pitch", "body": "Bản nháp", "status": "published" }),
        ),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(body["status"], "draft");
    assert_eq!(body["owner_id"], json!(editor_id.to_string()));
    let content_id = body["id"].as_str().unwrap().to_string();

    // Sales sees nothing yet
    let (ok, body, _) = send(&app, get("/sales/contents", Some(&sales_token))).await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 0);

    // Admin publishes
    let (ok, _, _) = send(
        &app,
        post(
            &format!("/admin/contents/{}/publish", content_id),
            Some(&admin_token),
        ),
    )
    .await;
    assert_eq!(ok, StatusCode::OK);

    // Now the sales library lists it
    let (ok, body, _) = send(&app, get("/sales/contents", Some(&sales_token))).await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_copy_returns_personalized_text_and_counts() {
    let (uow, app) = test_app();
    let (sales_id, sales_token) = provision(
        &uow,
        &app,
        "sales@example.com",
        Some(AppRole::Sales),
        AccountStatus::Active,
    )
    .await;
    let (_, admin_token) = provision(
        &uow,
        &app,
        "admin@example.com",
        Some(AppRole::Admin),
        AccountStatus::Active,
    )
    .await;

    uow.with_world(|w| {
        let profile = w.profiles.iter_mut().find(|p| p.id == sales_id).unwrap();
        profile.phone_number = Some("0123 456 789".to_string());
    });

    let (created, body, _) = send(
        &app,
        post_json(
            "/admin/contents",
            Some(&admin_token),
            json!({ "title": "Khuyến mãi", "body": "Giảm giá sốc", "status": "published" }),
        ),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    let content_id = body["id"].as_str().unwrap().to_string();

    let copy_path = format!("/contents/{}/copy", content_id);
    let (ok, body, _) = send(&app, post(&copy_path, Some(&sales_token))).await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(body["copy_count"], 1);
    assert_eq!(body["text"], "Giảm giá sốc\n\nLiên hệ ngay hotline: 0123 456 789");

    // Anonymous copy attempts are redirected to sign-in, not counted
    let (status, _, location) = send(&app, post(&copy_path, None)).await;
    assert_eq!(status, StatusCode::TEMPORARY_REDIRECT);
    let expected = format!("/auth?from=%2Fcontents%2F{}%2Fcopy", content_id);
    assert_eq!(location.as_deref(), Some(expected.as_str()));

    let untouched = uow.with_world(|w| w.contents[0].copy_count);
    assert_eq!(untouched, 1);
}

#[tokio::test]
async fn test_admin_sees_hidden_topic_content_sales_does_not() {
    let (uow, app) = test_app();
    let (_, admin_token) = provision(
        &uow,
        &app,
        "admin@example.com",
        Some(AppRole::Admin),
        AccountStatus::Active,
    )
    .await;
    let (_, sales_token) = provision(
        &uow,
        &app,
        "sales@example.com",
        Some(AppRole::Sales),
        AccountStatus::Active,
    )
    .await;

    // Admin creates a hidden topic with published content under it
    let (created, topic, _) = send(
        &app,
        post_json(
            "/admin/topics",
            Some(&admin_token),
            json!({
                "name": "Hidden topic",
                "name_vi": "Chủ đề ẩn",
                "icon": "Star",
                "color": "primary",
                "status": "hidden"
            }),
        ),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);
    let topic_id = topic["id"].as_str().unwrap().to_string();

    let (created, _, _) = send(
        &app,
        post_json(
            "/admin/contents",
            Some(&admin_token),
            json!({
                "title": "Secret",
                "body": "...",
                "topic_id": topic_id,
                "status": "published"
            }),
        ),
    )
    .await;
    assert_eq!(created, StatusCode::CREATED);

    // The hidden topic is absent from the sales topic list
    let (ok, topics, _) = send(&app, get("/topics", Some(&sales_token))).await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(topics.as_array().unwrap().len(), 0);

    // And its content is filtered out of the sales library
    let (ok, contents, _) = send(&app, get("/contents", Some(&sales_token))).await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(contents.as_array().unwrap().len(), 0);

    // Admin sees both
    let (ok, contents, _) = send(&app, get("/admin/contents", Some(&admin_token))).await;
    assert_eq!(ok, StatusCode::OK);
    assert_eq!(contents.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_unmatched_path_is_not_found() {
    let (_, app) = test_app();

    let (status, body, _) = send(&app, get("/no-such-page", None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}
