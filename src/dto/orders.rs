use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderStatus, PaymentStatus};
use crate::receipt::PageFormat;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePaymentStatusRequest {
    #[serde(rename = "payment_status")]
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}

/// What the lifecycle guard offers for an order: legal next statuses plus
/// the always-open payment choices.
#[derive(Debug, Serialize, ToSchema)]
pub struct TransitionOptions {
    pub current: OrderStatus,
    pub next: Vec<OrderStatus>,
    pub payment: Vec<PaymentStatus>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WhatsappLink {
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReceiptQuery {
    #[serde(default)]
    pub format: PageFormat,
}
