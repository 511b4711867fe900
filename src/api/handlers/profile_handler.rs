//! Profile handlers (self-service).

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AuthSession;
use crate::api::AppState;
use crate::domain::{Profile, ProfileSettings};
use crate::errors::{AppError, AppResult};

/// Profile settings update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    /// Display name
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    #[schema(example = "Anh Minh")]
    pub full_name: Option<String>,
    /// Hotline appended to copied content
    #[schema(example = "0123 456 789")]
    pub phone_number: Option<String>,
    /// Signature appended to copied content
    #[schema(example = "Anh Minh - MKT")]
    pub signature_text: Option<String>,
}

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/", get(get_profile).put(update_profile))
}

/// Get the caller's profile
#[utoipa::path(
    get,
    path = "/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Own profile", body = Profile),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
) -> AppResult<Json<Profile>> {
    let user = session.user.ok_or(AppError::Unauthorized)?;
    let profile = state.profile_service.get_profile(user.id).await?;
    Ok(Json(profile))
}

/// Update the caller's settings (name, hotline, signature)
#[utoipa::path(
    put,
    path = "/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Validation error")
    )
)]
pub async fn update_profile(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateProfileRequest>,
) -> AppResult<Json<Profile>> {
    let user = session.user.ok_or(AppError::Unauthorized)?;

    let profile = state
        .profile_service
        .update_settings(
            user.id,
            ProfileSettings {
                full_name: payload.full_name,
                phone_number: payload.phone_number,
                signature_text: payload.signature_text,
            },
        )
        .await?;

    Ok(Json(profile))
}
