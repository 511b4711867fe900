//! Admin dashboard handler.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::errors::AppResult;
use crate::services::DashboardStats;

/// Create dashboard routes
pub fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}

/// Aggregate library numbers: totals, most recent, most copied
#[utoipa::path(
    get,
    path = "/admin/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard stats", body = DashboardStats)
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let stats = state.catalog_service.dashboard_stats().await?;
    Ok(Json(stats))
}
