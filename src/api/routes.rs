//! Application route configuration.
//!
//! Route subtrees mirror the product surface: public auth, the member
//! area, the waiting room, and the admin/editor/sales subtrees, each
//! behind its guard. Identity resolution wraps everything so guards
//! always see a fully resolved session.

use axum::{
    extract::State, http::StatusCode, middleware, response::Json, routing::get, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    admin_banner_routes, admin_content_routes, admin_image_routes, admin_software_routes,
    admin_topic_routes, auth_routes, banner_routes, content_routes, dashboard_routes,
    editor_content_routes, feed_routes, profile_routes, sales_content_routes, software_routes,
    topic_routes, user_routes, waiting_room_routes,
};
use super::middleware::{
    admin_guard, editor_guard, identity_middleware, member_guard, pending_guard, sales_guard,
};
use super::openapi::ApiDoc;
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Member area: any authenticated account in good standing
    let member = Router::new()
        .nest("/topics", topic_routes())
        .nest("/contents", content_routes())
        .nest("/software", software_routes())
        .nest("/banners", banner_routes())
        .nest("/profile", profile_routes())
        .nest("/feed", feed_routes())
        .route_layer(middleware::from_fn(member_guard));

    // Waiting room: pending accounts ask for activation here
    let waiting_room = Router::new()
        .nest("/waiting-room", waiting_room_routes())
        .route_layer(middleware::from_fn(pending_guard));

    // Admin subtree
    let admin = Router::new()
        .nest("/admin/dashboard", dashboard_routes())
        .nest("/admin/users", user_routes())
        .nest("/admin/topics", admin_topic_routes())
        .nest("/admin/contents", admin_content_routes())
        .nest("/admin/software", admin_software_routes())
        .nest("/admin/images", admin_image_routes())
        .nest("/admin/banners", admin_banner_routes())
        .route_layer(middleware::from_fn(admin_guard));

    // Editor subtree
    let editor = Router::new()
        .nest("/editor/contents", editor_content_routes())
        .route_layer(middleware::from_fn(editor_guard));

    // Sales subtree
    let sales = Router::new()
        .nest("/sales/contents", sales_content_routes())
        .route_layer(middleware::from_fn(sales_guard));

    Router::new()
        // Health check endpoints
        .route("/", get(root))
        .route("/health", get(health))
        // OpenAPI Swagger UI documentation
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public authentication routes
        .nest("/auth", auth_routes())
        .merge(member)
        .merge(waiting_room)
        .merge(admin)
        .merge(editor)
        .merge(sales)
        .fallback(not_found)
        // Identity resolution must wrap every guard
        .layer(middleware::from_fn_with_state(
            state.clone(),
            identity_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Content Hub API"
}

/// Not-found fallback for unmatched paths
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": { "code": "NOT_FOUND", "message": "Page not found" } })),
    )
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: ServiceStatus,
}

/// Individual service health status
#[derive(Serialize)]
struct ServiceStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_status = match &state.database {
        Some(db) => match db.ping().await {
            Ok(_) => ServiceStatus {
                status: "healthy",
                error: None,
            },
            Err(e) => ServiceStatus {
                status: "unhealthy",
                error: Some(e.to_string()),
            },
        },
        None => ServiceStatus {
            status: "not configured",
            error: None,
        },
    };

    let healthy = db_status.status != "unhealthy";
    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" },
        database: db_status,
    };

    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
