use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::Html,
    routing::{get, patch},
};

use crate::{
    dto::orders::{
        OrderList, OrderListQuery, ReceiptQuery, TransitionOptions, UpdateOrderStatusRequest,
        UpdatePaymentStatusRequest, WhatsappLink,
    },
    error::{AppError, AppResult},
    lifecycle,
    models::Order,
    receipt,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_orders))
        .route("/{id}", get(get_order))
        .route("/{id}/status", patch(update_order_status))
        .route("/{id}/payment", patch(update_payment_status))
        .route("/{id}/transitions", get(order_transitions))
        .route("/{id}/receipt", get(order_receipt))
        .route("/{id}/whatsapp", get(order_whatsapp_link))
}

#[utoipa::path(get, path = "/api/orders", tag = "Orders")]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Json<ApiResponse<OrderList>> {
    let mut items = state.store.orders().await;
    if let Some(status) = query.status {
        items.retain(|o| o.status == status);
    }
    Json(ApiResponse::success("Ok", OrderList { items }))
}

#[utoipa::path(get, path = "/api/orders/{id}", tag = "Orders")]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.store.order_by_id(&id).await.ok_or(AppError::NotFound)?;
    Ok(Json(ApiResponse::success("Ok", order)))
}

#[utoipa::path(patch, path = "/api/orders/{id}/status", tag = "Orders")]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state.store.update_order_status(&id, payload.status).await?;
    Ok(Json(ApiResponse::success("Status updated", order)))
}

#[utoipa::path(patch, path = "/api/orders/{id}/payment", tag = "Orders")]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePaymentStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let order = state
        .store
        .update_payment_status(&id, payload.payment_status)
        .await?;
    Ok(Json(ApiResponse::success("Payment status updated", order)))
}

#[utoipa::path(get, path = "/api/orders/{id}/transitions", tag = "Orders")]
pub async fn order_transitions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<TransitionOptions>>> {
    let order = state.store.order_by_id(&id).await.ok_or(AppError::NotFound)?;
    let options = TransitionOptions {
        current: order.status,
        next: lifecycle::allowed_transitions(order.status).to_vec(),
        payment: lifecycle::payment_options().to_vec(),
    };
    Ok(Json(ApiResponse::success("Ok", options)))
}

#[utoipa::path(get, path = "/api/orders/{id}/receipt", tag = "Orders")]
pub async fn order_receipt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<ReceiptQuery>,
) -> AppResult<Html<String>> {
    let order = state.store.order_by_id(&id).await.ok_or(AppError::NotFound)?;
    Ok(Html(receipt::render_receipt(&order, query.format)))
}

#[utoipa::path(get, path = "/api/orders/{id}/whatsapp", tag = "Orders")]
pub async fn order_whatsapp_link(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<WhatsappLink>>> {
    let order = state.store.order_by_id(&id).await.ok_or(AppError::NotFound)?;
    let link = WhatsappLink {
        url: receipt::whatsapp_link(&order),
    };
    Ok(Json(ApiResponse::success("Ok", link)))
}
