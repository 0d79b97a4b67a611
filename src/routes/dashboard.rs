use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use chrono::Local;

use crate::{
    dto::dashboard::{RevenueSeries, StatusDistribution, TopProducts, WindowQuery},
    response::ApiResponse,
    state::AppState,
    stats::{self, DailySummary},
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(summary))
        .route("/status-distribution", get(status_distribution))
        .route("/revenue-series", get(revenue_series))
        .route("/top-products", get(top_products))
}

#[utoipa::path(get, path = "/api/dashboard/summary", tag = "Dashboard")]
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Json<ApiResponse<DailySummary>> {
    let orders = state.store.orders().await;
    let now = Local::now().fixed_offset();
    let data = stats::daily_summary(&orders, query.window, now);
    Json(ApiResponse::success("Ok", data))
}

#[utoipa::path(get, path = "/api/dashboard/status-distribution", tag = "Dashboard")]
pub async fn status_distribution(
    State(state): State<AppState>,
) -> Json<ApiResponse<StatusDistribution>> {
    let orders = state.store.orders().await;
    let items = stats::status_distribution(&orders);
    Json(ApiResponse::success("Ok", StatusDistribution { items }))
}

#[utoipa::path(get, path = "/api/dashboard/revenue-series", tag = "Dashboard")]
pub async fn revenue_series(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Json<ApiResponse<RevenueSeries>> {
    let orders = state.store.orders().await;
    let now = Local::now().fixed_offset();
    let items = stats::revenue_series(&orders, query.window, now);
    Json(ApiResponse::success("Ok", RevenueSeries { items }))
}

#[utoipa::path(get, path = "/api/dashboard/top-products", tag = "Dashboard")]
pub async fn top_products(
    State(state): State<AppState>,
    Query(query): Query<WindowQuery>,
) -> Json<ApiResponse<TopProducts>> {
    let orders = state.store.orders().await;
    let now = Local::now().fixed_offset();
    let items = stats::top_products(&orders, query.window, now);
    Json(ApiResponse::success("Ok", TopProducts { items }))
}
