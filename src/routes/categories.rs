use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{models::Category, response::ApiResponse, state::AppState};

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<Category>,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

// Reference data: loaded from the mirror, never mutated here.
#[utoipa::path(get, path = "/api/categories", tag = "Categories")]
pub async fn list_categories(State(state): State<AppState>) -> Json<ApiResponse<CategoryList>> {
    let items = state.store.categories().await;
    Json(ApiResponse::success("Ok", CategoryList { items }))
}
