//! Image handlers (admin CRUD).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{AppImage, ImageDraft};
use crate::errors::AppResult;

/// Image create/update request
#[derive(Debug, serde::Deserialize, Validate, ToSchema)]
pub struct ImageRequest {
    #[validate(url(message = "Image URL must be a valid URL"))]
    #[schema(example = "https://images.example.com/banner.png")]
    pub url: String,
    pub content_id: Option<Uuid>,
    #[serde(default)]
    pub content_title: String,
    pub description: Option<String>,
}

impl From<ImageRequest> for ImageDraft {
    fn from(req: ImageRequest) -> Self {
        ImageDraft {
            url: req.url,
            content_id: req.content_id,
            content_title: req.content_title,
            description: req.description,
        }
    }
}

/// Admin routes: CRUD
pub fn admin_image_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_images).post(create_image))
        .route(
            "/:id",
            axum::routing::put(update_image).delete(delete_image),
        )
}

/// All images, newest first (admin)
#[utoipa::path(
    get,
    path = "/admin/images",
    tag = "Images",
    responses(
        (status = 200, description = "All images", body = Vec<AppImage>)
    )
)]
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<AppImage>>> {
    let images = state.catalog_service.list_images().await?;
    Ok(Json(images))
}

/// Create an image entry (admin)
#[utoipa::path(
    post,
    path = "/admin/images",
    tag = "Images",
    request_body = ImageRequest,
    responses(
        (status = 201, description = "Image created", body = AppImage),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_image(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ImageRequest>,
) -> AppResult<(StatusCode, Json<AppImage>)> {
    let image = state.catalog_service.create_image(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(image)))
}

/// Update an image entry (admin)
#[utoipa::path(
    put,
    path = "/admin/images/{id}",
    tag = "Images",
    params(("id" = Uuid, Path, description = "Image ID")),
    request_body = ImageRequest,
    responses(
        (status = 200, description = "Image updated", body = AppImage),
        (status = 404, description = "Image not found")
    )
)]
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<ImageRequest>,
) -> AppResult<Json<AppImage>> {
    let image = state
        .catalog_service
        .update_image(id, payload.into())
        .await?;
    Ok(Json(image))
}

/// Delete an image entry (admin). Images are never removed implicitly
/// when their content goes away.
#[utoipa::path(
    delete,
    path = "/admin/images/{id}",
    tag = "Images",
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.catalog_service.delete_image(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
