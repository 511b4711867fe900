//! User management handlers (admin) and the waiting-room request.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AuthSession;
use crate::api::AppState;
use crate::domain::{AccountStatus, ActivationRequest, AppRole, Profile, UserAccount};
use crate::errors::{AppError, AppResult};

/// Role assignment request; `role: null` removes the assignment
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetRoleRequest {
    #[schema(example = "editor")]
    pub role: Option<AppRole>,
}

/// Status change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SetStatusRequest {
    #[schema(example = "active")]
    pub status: AccountStatus,
}

/// Create admin user-management routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_accounts))
        .route("/:id", axum::routing::delete(delete_account))
        .route("/:id/role", put(set_role))
        .route("/:id/status", put(set_status))
        .route("/activation-requests", get(list_activation_requests))
        .route("/activation-requests/:user_id/approve", post(approve_activation))
        .route("/activation-requests/:user_id/reject", post(reject_activation))
}

/// Create waiting-room routes (pending users)
pub fn waiting_room_routes() -> Router<AppState> {
    Router::new().route("/request", post(request_activation))
}

/// List all accounts with roles (admin)
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Users",
    responses(
        (status = 200, description = "All accounts", body = Vec<UserAccount>)
    )
)]
pub async fn list_accounts(State(state): State<AppState>) -> AppResult<Json<Vec<UserAccount>>> {
    let accounts = state.user_service.list_accounts().await?;
    Ok(Json(accounts))
}

/// Assign or remove a role (admin)
#[utoipa::path(
    put,
    path = "/admin/users/{id}/role",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = SetRoleRequest,
    responses(
        (status = 204, description = "Role updated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn set_role(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SetRoleRequest>,
) -> AppResult<StatusCode> {
    state.user_service.set_role(id, payload.role).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Change an account's status (admin). Activating a pending account
/// also resolves its open activation request.
#[utoipa::path(
    put,
    path = "/admin/users/{id}/status",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = SetStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Profile),
        (status = 400, description = "Invalid status transition"),
        (status = 404, description = "User not found")
    )
)]
pub async fn set_status(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SetStatusRequest>,
) -> AppResult<Json<Profile>> {
    let admin = session.user.ok_or(AppError::Unauthorized)?;

    let profile = state
        .user_service
        .set_status(id, payload.status, admin.id)
        .await?;

    Ok(Json(profile))
}

/// Delete an account (admin, cannot delete self)
#[utoipa::path(
    delete,
    path = "/admin/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Cannot delete your own account"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_account(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let admin = session.user.ok_or(AppError::Unauthorized)?;
    state.user_service.delete_account(id, admin.id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List open activation requests (admin)
#[utoipa::path(
    get,
    path = "/admin/users/activation-requests",
    tag = "Users",
    responses(
        (status = 200, description = "Open activation requests", body = Vec<ActivationRequest>)
    )
)]
pub async fn list_activation_requests(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ActivationRequest>>> {
    let requests = state.user_service.list_activation_requests().await?;
    Ok(Json(requests))
}

/// Approve an activation request (admin)
#[utoipa::path(
    post,
    path = "/admin/users/activation-requests/{user_id}/approve",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "Requesting user ID")),
    responses(
        (status = 204, description = "Request approved, account activated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn approve_activation(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let admin = session.user.ok_or(AppError::Unauthorized)?;
    state
        .user_service
        .approve_activation(user_id, admin.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Reject an activation request (admin)
#[utoipa::path(
    post,
    path = "/admin/users/activation-requests/{user_id}/reject",
    tag = "Users",
    params(("user_id" = Uuid, Path, description = "Requesting user ID")),
    responses(
        (status = 204, description = "Request rejected")
    )
)]
pub async fn reject_activation(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let admin = session.user.ok_or(AppError::Unauthorized)?;
    state
        .user_service
        .reject_activation(user_id, admin.id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// A pending user asks for activation. Sending twice yields a specific
/// conflict, not a generic failure.
#[utoipa::path(
    post,
    path = "/waiting-room/request",
    tag = "Users",
    responses(
        (status = 201, description = "Request created", body = ActivationRequest),
        (status = 400, description = "Account is not awaiting activation"),
        (status = 409, description = "Request already sent")
    )
)]
pub async fn request_activation(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<ActivationRequest>)> {
    let user = session.user.ok_or(AppError::Unauthorized)?;
    let request = state.user_service.request_activation(&user).await?;
    Ok((StatusCode::CREATED, Json(request)))
}
