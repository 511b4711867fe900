//! Auth and user service tests over the in-memory persistence layer.

mod support;

use std::sync::Arc;

use content_hub::config::Config;
use content_hub::domain::{AccountStatus, ActivationStatus, AppRole};
use content_hub::errors::AppError;
use content_hub::infra::UnitOfWork;
use content_hub::services::{
    AuthService, Authenticator, CurrentUser, UserManager, UserService,
};

use support::InMemory;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

fn auth_service(uow: &Arc<InMemory>) -> Authenticator<InMemory> {
    Authenticator::new(uow.clone(), Config::for_tests(TEST_SECRET))
}

fn user_service(uow: &Arc<InMemory>) -> UserManager<InMemory> {
    UserManager::new(uow.clone())
}

async fn register(uow: &Arc<InMemory>, email: &str) -> CurrentUser {
    let auth = auth_service(uow);
    let account = auth
        .register(
            email.to_string(),
            "SecurePass123!".to_string(),
            "Test User".to_string(),
        )
        .await
        .unwrap();

    CurrentUser {
        id: account.id,
        email: account.email,
        profile: uow.users().profile(account.id).await.unwrap(),
        role: None,
    }
}

#[tokio::test]
async fn test_register_creates_pending_profile_without_role() {
    let uow = InMemory::new();
    let auth = auth_service(&uow);

    let account = auth
        .register(
            "new@example.com".to_string(),
            "SecurePass123!".to_string(),
            "New User".to_string(),
        )
        .await
        .unwrap();

    assert_eq!(account.status, AccountStatus::Pending);
    assert_eq!(account.role, None);

    let profile = uow.users().profile(account.id).await.unwrap().unwrap();
    assert_eq!(profile.status, AccountStatus::Pending);
    assert_eq!(uow.users().role(account.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let uow = InMemory::new();
    let auth = auth_service(&uow);

    register(&uow, "dup@example.com").await;
    let result = auth
        .register(
            "dup@example.com".to_string(),
            "SecurePass123!".to_string(),
            "Someone Else".to_string(),
        )
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_login_and_authenticate_round_trip() {
    let uow = InMemory::new();
    let auth = auth_service(&uow);
    let user = register(&uow, "login@example.com").await;

    uow.users()
        .set_role(user.id, Some(AppRole::Editor))
        .await
        .unwrap();

    let token = auth
        .login("login@example.com".to_string(), "SecurePass123!".to_string())
        .await
        .unwrap();

    let resolved = auth.authenticate(&token.access_token).await.unwrap();
    assert_eq!(resolved.id, user.id);
    assert_eq!(resolved.role, Some(AppRole::Editor));
    assert_eq!(resolved.status(), Some(AccountStatus::Pending));
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let uow = InMemory::new();
    let auth = auth_service(&uow);
    register(&uow, "victim@example.com").await;

    let wrong_password = auth
        .login("victim@example.com".to_string(), "WrongPass123!".to_string())
        .await;
    assert!(matches!(
        wrong_password.unwrap_err(),
        AppError::InvalidCredentials
    ));

    let unknown_user = auth
        .login("nobody@example.com".to_string(), "SecurePass123!".to_string())
        .await;
    assert!(matches!(
        unknown_user.unwrap_err(),
        AppError::InvalidCredentials
    ));
}

#[tokio::test]
async fn test_activation_request_is_unique_while_open() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let user = register(&uow, "pending@example.com").await;

    service.request_activation(&user).await.unwrap();

    // A second open request is a specific conflict, not a generic error
    let duplicate = service.request_activation(&user).await;
    match duplicate.unwrap_err() {
        AppError::Conflict(entity) => assert_eq!(entity, "Activation request"),
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn test_active_user_cannot_request_activation() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let mut user = register(&uow, "active@example.com").await;

    uow.users()
        .set_status(user.id, AccountStatus::Active)
        .await
        .unwrap();
    user.profile = uow.users().profile(user.id).await.unwrap();

    let result = service.request_activation(&user).await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_approve_activation_activates_profile_and_resolves_request() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let user = register(&uow, "approve-me@example.com").await;
    let admin = register(&uow, "admin@example.com").await;

    service.request_activation(&user).await.unwrap();
    service.approve_activation(user.id, admin.id).await.unwrap();

    let profile = uow.users().profile(user.id).await.unwrap().unwrap();
    assert_eq!(profile.status, AccountStatus::Active);

    // The open request is gone; its resolution is stamped
    assert!(service.list_activation_requests().await.unwrap().is_empty());
    let request = uow.with_world(|w| w.requests[0].clone());
    assert_eq!(request.status, ActivationStatus::Approved);
    assert_eq!(request.processed_by, Some(admin.id));
}

#[tokio::test]
async fn test_reject_leaves_profile_pending() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let user = register(&uow, "reject-me@example.com").await;
    let admin = register(&uow, "admin@example.com").await;

    service.request_activation(&user).await.unwrap();
    service.reject_activation(user.id, admin.id).await.unwrap();

    let profile = uow.users().profile(user.id).await.unwrap().unwrap();
    assert_eq!(profile.status, AccountStatus::Pending);

    let request = uow.with_world(|w| w.requests[0].clone());
    assert_eq!(request.status, ActivationStatus::Rejected);
}

#[tokio::test]
async fn test_status_transitions_are_validated() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let user = register(&uow, "transitions@example.com").await;
    let admin = register(&uow, "admin@example.com").await;

    // pending -> locked is not a legal transition
    let result = service
        .set_status(user.id, AccountStatus::Locked, admin.id)
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    // pending -> active -> locked -> active is
    for status in [
        AccountStatus::Active,
        AccountStatus::Locked,
        AccountStatus::Active,
    ] {
        let profile = service.set_status(user.id, status, admin.id).await.unwrap();
        assert_eq!(profile.status, status);
    }
}

#[tokio::test]
async fn test_activating_pending_user_resolves_open_request() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let user = register(&uow, "toggle@example.com").await;
    let admin = register(&uow, "admin@example.com").await;

    service.request_activation(&user).await.unwrap();
    service
        .set_status(user.id, AccountStatus::Active, admin.id)
        .await
        .unwrap();

    let request = uow.with_world(|w| w.requests[0].clone());
    assert_eq!(request.status, ActivationStatus::Approved);
    assert_eq!(request.processed_by, Some(admin.id));
}

#[tokio::test]
async fn test_delete_account_guards_self_and_removes_rows() {
    let uow = InMemory::new();
    let service = user_service(&uow);
    let user = register(&uow, "doomed@example.com").await;
    let admin = register(&uow, "admin@example.com").await;

    service.request_activation(&user).await.unwrap();

    let self_delete = service.delete_account(admin.id, admin.id).await;
    assert!(matches!(self_delete.unwrap_err(), AppError::Validation(_)));

    service.delete_account(user.id, admin.id).await.unwrap();
    assert!(uow.users().find_by_id(user.id).await.unwrap().is_none());
    assert!(uow.users().profile(user.id).await.unwrap().is_none());
    assert!(uow.with_world(|w| w.requests.is_empty()));
}
