//! Content handlers: browsing, authoring, publication, copying.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{AuthSession, GuardDecision};
use crate::api::AppState;
use crate::domain::{Content, ContentDraft, ContentPatch, ContentStatus, CopyResponse};
use crate::errors::{AppError, AppResult};

/// Content creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateContentRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    #[schema(example = "Flash Sale cuối tuần")]
    pub title: String,
    #[schema(example = "🔥 FLASH SALE CUỐI TUẦN - GIẢM 50%!")]
    pub body: String,
    pub topic_id: Option<Uuid>,
    pub software_id: Option<Uuid>,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub purpose: String,
    /// Ignored for editors, who always produce drafts
    #[serde(default = "default_status")]
    pub status: ContentStatus,
    pub image_url: Option<String>,
}

fn default_status() -> ContentStatus {
    ContentStatus::Draft
}

/// Content update request; absent fields are left untouched. The
/// double-optional referential fields distinguish "leave alone" from
/// "clear".
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateContentRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(default)]
    pub topic_id: Option<Option<Uuid>>,
    #[serde(default)]
    pub software_id: Option<Option<Uuid>>,
    pub platforms: Option<Vec<String>>,
    pub purpose: Option<String>,
    pub status: Option<ContentStatus>,
    #[serde(default)]
    pub image_url: Option<Option<String>>,
}

/// Member routes: browsing and copying
pub fn content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contents))
        .route("/published", get(list_published_contents))
        .route("/:id", get(get_content))
        .route("/:id/copy", post(copy_content))
}

/// Admin routes: full CRUD plus publication
pub fn admin_content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_contents).post(create_content))
        .route(
            "/:id",
            put(update_content).delete(delete_content),
        )
        .route("/:id/publish", post(publish_content))
}

/// Editor routes: own library, draft authoring
pub fn editor_content_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(my_contents).post(create_content))
        .route("/:id", put(update_content))
}

/// Sales routes: published library
pub fn sales_content_routes() -> Router<AppState> {
    Router::new().route("/", get(list_published_contents))
}

/// Contents visible to the caller (all of them for admin)
#[utoipa::path(
    get,
    path = "/contents",
    tag = "Content",
    responses(
        (status = 200, description = "Visible contents", body = Vec<Content>)
    )
)]
pub async fn list_contents(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Content>>> {
    let contents = state.content_service.list_visible(session.actor()).await?;
    Ok(Json(contents))
}

/// Published contents with visible topics; drafts excluded for everyone
#[utoipa::path(
    get,
    path = "/contents/published",
    tag = "Content",
    responses(
        (status = 200, description = "Published contents", body = Vec<Content>)
    )
)]
pub async fn list_published_contents(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Content>>> {
    let contents = state
        .content_service
        .list_published(session.actor())
        .await?;
    Ok(Json(contents))
}

/// One content item, 404 when invisible to the caller
#[utoipa::path(
    get,
    path = "/contents/{id}",
    tag = "Content",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content", body = Content),
        (status = 404, description = "Not found or not visible")
    )
)]
pub async fn get_content(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Content>> {
    let content = state
        .content_service
        .get_visible(session.actor(), id)
        .await?;
    Ok(Json(content))
}

/// Copy content: returns the personalized text and bumps the counter.
/// Anonymous callers are redirected to sign-in, never silently counted.
#[utoipa::path(
    post,
    path = "/contents/{id}/copy",
    tag = "Content",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Personalized copy text", body = CopyResponse),
        (status = 307, description = "Anonymous caller redirected to sign-in"),
        (status = 404, description = "Not found or not visible")
    )
)]
pub async fn copy_content(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let Some(user) = session.user else {
        // Login prompt, not a silent count
        return GuardDecision::SignIn
            .redirect(&format!("/contents/{}/copy", id))
            .unwrap_or_else(|| AppError::Unauthorized.into_response());
    };

    match state.content_service.copy(&user, id).await {
        Ok(copy) => Json(copy).into_response(),
        Err(e) => e.into_response(),
    }
}

/// The caller's own contents (editor library)
#[utoipa::path(
    get,
    path = "/editor/contents",
    tag = "Content",
    responses(
        (status = 200, description = "Own contents", body = Vec<Content>)
    )
)]
pub async fn my_contents(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Content>>> {
    let user = session.user.ok_or(AppError::Unauthorized)?;
    let contents = state.content_service.my_contents(&user).await?;
    Ok(Json(contents))
}

/// Create content. Editors always get a draft they own; admins choose
/// status freely.
#[utoipa::path(
    post,
    path = "/admin/contents",
    tag = "Content",
    request_body = CreateContentRequest,
    responses(
        (status = 201, description = "Content created", body = Content),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not allowed to create content")
    )
)]
pub async fn create_content(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateContentRequest>,
) -> AppResult<(StatusCode, Json<Content>)> {
    let user = session.user.ok_or(AppError::Unauthorized)?;

    let content = state
        .content_service
        .create(
            &user,
            ContentDraft {
                title: payload.title,
                body: payload.body,
                topic_id: payload.topic_id,
                software_id: payload.software_id,
                platforms: payload.platforms,
                purpose: payload.purpose,
                status: payload.status,
                image_url: payload.image_url,
                owner_id: None,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(content)))
}

/// Update content under the ownership policy
#[utoipa::path(
    put,
    path = "/admin/contents/{id}",
    tag = "Content",
    params(("id" = Uuid, Path, description = "Content ID")),
    request_body = UpdateContentRequest,
    responses(
        (status = 200, description = "Content updated", body = Content),
        (status = 403, description = "Not the owner"),
        (status = 404, description = "Content not found")
    )
)]
pub async fn update_content(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateContentRequest>,
) -> AppResult<Json<Content>> {
    let user = session.user.ok_or(AppError::Unauthorized)?;

    let content = state
        .content_service
        .update(
            &user,
            id,
            ContentPatch {
                title: payload.title,
                body: payload.body,
                topic_id: payload.topic_id,
                software_id: payload.software_id,
                platforms: payload.platforms,
                purpose: payload.purpose,
                status: payload.status,
                image_url: payload.image_url,
            },
        )
        .await?;

    Ok(Json(content))
}

/// Publish content (admin only)
#[utoipa::path(
    post,
    path = "/admin/contents/{id}/publish",
    tag = "Content",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 200, description = "Content published", body = Content),
        (status = 403, description = "Only admins publish"),
        (status = 404, description = "Content not found")
    )
)]
pub async fn publish_content(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Content>> {
    let user = session.user.ok_or(AppError::Unauthorized)?;
    let content = state.content_service.publish(&user, id).await?;
    Ok(Json(content))
}

/// Delete content (admin only)
#[utoipa::path(
    delete,
    path = "/admin/contents/{id}",
    tag = "Content",
    params(("id" = Uuid, Path, description = "Content ID")),
    responses(
        (status = 204, description = "Content deleted"),
        (status = 403, description = "Only admins delete"),
        (status = 404, description = "Content not found")
    )
)]
pub async fn delete_content(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let user = session.user.ok_or(AppError::Unauthorized)?;
    state.content_service.delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
