//! Topic handlers: browsing and admin CRUD.

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::AuthSession;
use crate::api::AppState;
use crate::domain::{Content, Topic, TopicDraft, TopicStatus};
use crate::errors::AppResult;

/// Topic create/update request
#[derive(Debug, serde::Deserialize, Validate, ToSchema)]
pub struct TopicRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Sales Content")]
    pub name: String,
    #[schema(example = "Content Bán Hàng")]
    pub name_vi: String,
    #[serde(default)]
    pub description: String,
    #[schema(example = "ShoppingCart")]
    pub icon: String,
    #[schema(example = "primary")]
    pub color: String,
    pub status: TopicStatus,
}

impl From<TopicRequest> for TopicDraft {
    fn from(req: TopicRequest) -> Self {
        TopicDraft {
            name: req.name,
            name_vi: req.name_vi,
            description: req.description,
            icon: req.icon,
            color: req.color,
            status: req.status,
        }
    }
}

/// A topic together with its visible contents.
#[derive(Debug, Serialize, ToSchema)]
pub struct TopicDetail {
    pub topic: Topic,
    pub contents: Vec<Content>,
}

/// Member routes: browsing
pub fn topic_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_topics))
        .route("/:id", get(topic_detail))
}

/// Admin routes: CRUD
pub fn admin_topic_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_topics).post(create_topic))
        .route(
            "/:id",
            axum::routing::put(update_topic).delete(delete_topic),
        )
}

/// Topics visible to the caller, with content counts
#[utoipa::path(
    get,
    path = "/topics",
    tag = "Topics",
    responses(
        (status = 200, description = "Visible topics", body = Vec<Topic>)
    )
)]
pub async fn list_topics(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Topic>>> {
    let topics = state
        .catalog_service
        .visible_topics(session.actor().role)
        .await?;
    Ok(Json(topics))
}

/// One topic and its visible contents; hidden topics 404 for non-admin
#[utoipa::path(
    get,
    path = "/topics/{id}",
    tag = "Topics",
    params(("id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Topic with contents", body = TopicDetail),
        (status = 404, description = "Topic not found or hidden")
    )
)]
pub async fn topic_detail(
    Extension(session): Extension<AuthSession>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<TopicDetail>> {
    let actor = session.actor();
    let topic = state.catalog_service.visible_topic(actor.role, id).await?;
    let contents = state.content_service.list_by_topic(actor, id).await?;

    Ok(Json(TopicDetail { topic, contents }))
}

/// Create a topic (admin)
#[utoipa::path(
    post,
    path = "/admin/topics",
    tag = "Topics",
    request_body = TopicRequest,
    responses(
        (status = 201, description = "Topic created", body = Topic),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_topic(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TopicRequest>,
) -> AppResult<(StatusCode, Json<Topic>)> {
    let topic = state.catalog_service.create_topic(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(topic)))
}

/// Update a topic (admin)
#[utoipa::path(
    put,
    path = "/admin/topics/{id}",
    tag = "Topics",
    params(("id" = Uuid, Path, description = "Topic ID")),
    request_body = TopicRequest,
    responses(
        (status = 200, description = "Topic updated", body = Topic),
        (status = 404, description = "Topic not found")
    )
)]
pub async fn update_topic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<TopicRequest>,
) -> AppResult<Json<Topic>> {
    let topic = state
        .catalog_service
        .update_topic(id, payload.into())
        .await?;
    Ok(Json(topic))
}

/// Delete a topic (admin). Its content is left in place and stays
/// visible as orphaned content.
#[utoipa::path(
    delete,
    path = "/admin/topics/{id}",
    tag = "Topics",
    params(("id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 204, description = "Topic deleted"),
        (status = 404, description = "Topic not found")
    )
)]
pub async fn delete_topic(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.catalog_service.delete_topic(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
