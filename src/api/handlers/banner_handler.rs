//! Banner handlers: homepage carousel and admin CRUD.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{BannerDraft, BannerStatus, ProgramBanner};
use crate::errors::AppResult;

/// Banner create/update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BannerRequest {
    #[validate(url(message = "Image URL must be a valid URL"))]
    #[schema(example = "https://images.example.com/banner.png")]
    pub image_url: String,
    pub link_url: Option<String>,
    pub title: Option<String>,
    pub status: BannerStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl From<BannerRequest> for BannerDraft {
    fn from(req: BannerRequest) -> Self {
        BannerDraft {
            image_url: req.image_url,
            link_url: req.link_url,
            title: req.title,
            status: req.status,
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

/// Query options for the carousel
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct BannerQuery {
    /// Randomize the display order instead of using order_index
    #[serde(default)]
    pub shuffle: bool,
}

/// Member routes: the carousel
pub fn banner_routes() -> Router<AppState> {
    Router::new().route("/", get(live_banners))
}

/// Admin routes: CRUD
pub fn admin_banner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_banners).post(create_banner))
        .route(
            "/:id",
            axum::routing::put(update_banner).delete(delete_banner),
        )
}

/// Banners currently displayable, in carousel order (or shuffled)
#[utoipa::path(
    get,
    path = "/banners",
    tag = "Banners",
    params(BannerQuery),
    responses(
        (status = 200, description = "Live banners", body = Vec<ProgramBanner>)
    )
)]
pub async fn live_banners(
    State(state): State<AppState>,
    Query(query): Query<BannerQuery>,
) -> AppResult<Json<Vec<ProgramBanner>>> {
    let banners = state.banner_service.live_banners(query.shuffle).await?;
    Ok(Json(banners))
}

/// All banners for the admin table
#[utoipa::path(
    get,
    path = "/admin/banners",
    tag = "Banners",
    responses(
        (status = 200, description = "All banners", body = Vec<ProgramBanner>)
    )
)]
pub async fn list_banners(State(state): State<AppState>) -> AppResult<Json<Vec<ProgramBanner>>> {
    let banners = state.banner_service.list_banners().await?;
    Ok(Json(banners))
}

/// Create a banner, appended at the end of the display order (admin)
#[utoipa::path(
    post,
    path = "/admin/banners",
    tag = "Banners",
    request_body = BannerRequest,
    responses(
        (status = 201, description = "Banner created", body = ProgramBanner),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_banner(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BannerRequest>,
) -> AppResult<(StatusCode, Json<ProgramBanner>)> {
    let banner = state.banner_service.create_banner(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(banner)))
}

/// Update a banner (admin)
#[utoipa::path(
    put,
    path = "/admin/banners/{id}",
    tag = "Banners",
    params(("id" = Uuid, Path, description = "Banner ID")),
    request_body = BannerRequest,
    responses(
        (status = 200, description = "Banner updated", body = ProgramBanner),
        (status = 404, description = "Banner not found")
    )
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<BannerRequest>,
) -> AppResult<Json<ProgramBanner>> {
    let banner = state
        .banner_service
        .update_banner(id, payload.into())
        .await?;
    Ok(Json(banner))
}

/// Delete a banner (admin)
#[utoipa::path(
    delete,
    path = "/admin/banners/{id}",
    tag = "Banners",
    params(("id" = Uuid, Path, description = "Banner ID")),
    responses(
        (status = 204, description = "Banner deleted"),
        (status = 404, description = "Banner not found")
    )
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.banner_service.delete_banner(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
