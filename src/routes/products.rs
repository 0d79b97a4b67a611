use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    routing::{delete, get, post},
};

use crate::{
    dto::products::{ProductList, UploadQuery, UploadResponse},
    error::AppResult,
    models::Product,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(save_product))
        .route("/{id}", delete(delete_product))
        .route("/upload", post(upload_image))
}

#[utoipa::path(get, path = "/api/products", tag = "Products")]
pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<ProductList>> {
    let items = state.store.products().await;
    Json(ApiResponse::success("Ok", ProductList { items }))
}

/// A placeholder id (`new-*`) inserts; a persisted id updates.
#[utoipa::path(post, path = "/api/products", tag = "Products")]
pub async fn save_product(
    State(state): State<AppState>,
    Json(payload): Json<Product>,
) -> AppResult<Json<ApiResponse<Product>>> {
    state.session.require_admin().await?;
    let product = state.store.save_product(payload).await?;
    Ok(Json(ApiResponse::success("Product saved", product)))
}

#[utoipa::path(delete, path = "/api/products/{id}", tag = "Products")]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    state.session.require_admin().await?;
    state.store.delete_product(&id).await?;
    Ok(Json(ApiResponse::success("Deleted", serde_json::json!({}))))
}

/// Raw-body upload; the client persists the product only after this
/// returns, so a failed upload aborts the whole save.
#[utoipa::path(post, path = "/api/products/upload", tag = "Products", request_body(content_type = "application/octet-stream"))]
pub async fn upload_image(
    State(state): State<AppState>,
    Query(query): Query<UploadQuery>,
    body: Bytes,
) -> AppResult<Json<ApiResponse<UploadResponse>>> {
    state.session.require_admin().await?;
    match state.images.save(&query.file_name, &body).await {
        Ok(url) => Ok(Json(ApiResponse::success(
            "Uploaded",
            UploadResponse { url },
        ))),
        Err(err) => {
            state
                .store
                .record_error(format!("Erro no upload da imagem: {err}"))
                .await;
            Err(err)
        }
    }
}
