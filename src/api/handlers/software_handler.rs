//! Software handlers (admin CRUD + active listing).

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
use crate::domain::{Software, SoftwareDraft, TopicStatus};
use crate::errors::AppResult;

/// Software create/update request
#[derive(Debug, serde::Deserialize, Validate, ToSchema)]
pub struct SoftwareRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "MKT Care")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = "Chăm sóc")]
    pub tag: String,
    pub status: TopicStatus,
}

impl From<SoftwareRequest> for SoftwareDraft {
    fn from(req: SoftwareRequest) -> Self {
        SoftwareDraft {
            name: req.name,
            description: req.description,
            tag: req.tag,
            status: req.status,
        }
    }
}

/// Member routes: active software for tagging/filtering
pub fn software_routes() -> Router<AppState> {
    Router::new().route("/", get(active_software))
}

/// Admin routes: CRUD
pub fn admin_software_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_software).post(create_software))
        .route(
            "/:id",
            axum::routing::put(update_software).delete(delete_software),
        )
}

/// Active software entries
#[utoipa::path(
    get,
    path = "/software",
    tag = "Software",
    responses(
        (status = 200, description = "Active software", body = Vec<Software>)
    )
)]
pub async fn active_software(State(state): State<AppState>) -> AppResult<Json<Vec<Software>>> {
    let software = state.catalog_service.active_software().await?;
    Ok(Json(software))
}

/// All software entries (admin)
#[utoipa::path(
    get,
    path = "/admin/software",
    tag = "Software",
    responses(
        (status = 200, description = "All software", body = Vec<Software>)
    )
)]
pub async fn list_software(State(state): State<AppState>) -> AppResult<Json<Vec<Software>>> {
    let software = state.catalog_service.list_software().await?;
    Ok(Json(software))
}

/// Create a software entry (admin)
#[utoipa::path(
    post,
    path = "/admin/software",
    tag = "Software",
    request_body = SoftwareRequest,
    responses(
        (status = 201, description = "Software created", body = Software)
    )
)]
pub async fn create_software(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SoftwareRequest>,
) -> AppResult<(StatusCode, Json<Software>)> {
    let software = state
        .catalog_service
        .create_software(payload.into())
        .await?;
    Ok((StatusCode::CREATED, Json(software)))
}

/// Update a software entry (admin)
#[utoipa::path(
    put,
    path = "/admin/software/{id}",
    tag = "Software",
    params(("id" = Uuid, Path, description = "Software ID")),
    request_body = SoftwareRequest,
    responses(
        (status = 200, description = "Software updated", body = Software),
        (status = 404, description = "Software not found")
    )
)]
pub async fn update_software(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<SoftwareRequest>,
) -> AppResult<Json<Software>> {
    let software = state
        .catalog_service
        .update_software(id, payload.into())
        .await?;
    Ok(Json(software))
}

/// Delete a software entry (admin)
#[utoipa::path(
    delete,
    path = "/admin/software/{id}",
    tag = "Software",
    params(("id" = Uuid, Path, description = "Software ID")),
    responses(
        (status = 204, description = "Software deleted"),
        (status = 404, description = "Software not found")
    )
)]
pub async fn delete_software(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.catalog_service.delete_software(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
