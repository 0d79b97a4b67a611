use axum::{Json, Router, extract::State, routing::{get, post}};

use crate::{dto::sync::SyncStatus, error::AppResult, response::ApiResponse, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/status", get(sync_status))
        .route("/refresh", post(refresh))
}

#[utoipa::path(get, path = "/api/sync/status", tag = "Sync")]
pub async fn sync_status(State(state): State<AppState>) -> Json<ApiResponse<SyncStatus>> {
    let data = snapshot_status(&state).await;
    Json(ApiResponse::success("Ok", data))
}

/// Reload all three collections, like the client-side refetch.
#[utoipa::path(post, path = "/api/sync/refresh", tag = "Sync")]
pub async fn refresh(State(state): State<AppState>) -> AppResult<Json<ApiResponse<SyncStatus>>> {
    state.store.load_all().await?;
    let data = snapshot_status(&state).await;
    Ok(Json(ApiResponse::success("Refreshed", data)))
}

async fn snapshot_status(state: &AppState) -> SyncStatus {
    SyncStatus {
        categories: state.store.categories().await.len() as i64,
        products: state.store.products().await.len() as i64,
        orders: state.store.orders().await.len() as i64,
        error: state.store.last_error().await,
    }
}
