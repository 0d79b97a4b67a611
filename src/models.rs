use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fulfillment status of an order. The wire labels are the exact strings
/// stored in the `orders.status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    #[serde(rename = "Aguardando Aprovação")]
    Aguardando,
    #[serde(rename = "Em Preparo")]
    EmPreparo,
    #[serde(rename = "Concluído")]
    Concluido,
    #[serde(rename = "Cancelado")]
    Cancelado,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Aguardando,
        OrderStatus::EmPreparo,
        OrderStatus::Concluido,
        OrderStatus::Cancelado,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Aguardando => "Aguardando Aprovação",
            OrderStatus::EmPreparo => "Em Preparo",
            OrderStatus::Concluido => "Concluído",
            OrderStatus::Cancelado => "Cancelado",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status is an independent axis from [`OrderStatus`]; any
/// combination of the two is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    #[serde(rename = "Pendente")]
    Pendente,
    #[serde(rename = "Pago")]
    Pago,
    #[serde(rename = "Pagamento na Entrega")]
    PagamentoNaEntrega,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pendente,
        PaymentStatus::Pago,
        PaymentStatus::PagamentoNaEntrega,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pendente => "Pendente",
            PaymentStatus::Pago => "Pago",
            PaymentStatus::PagamentoNaEntrega => "Pagamento na Entrega",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Role {
    Admin,
    Atendente,
}

/// Session actor. There is no real authentication; switching is a local
/// selection among a fixed roster.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Weak reference to a category; empty when unset. A dangling id is a
    /// valid state, rendered as "N/A" by clients.
    pub category_id: String,
    pub price: Decimal,
    pub size: String,
    pub unit: String,
    pub image_url: String,
}

impl Product {
    /// Client-generated ids of the form `new-<timestamp>` mark a product
    /// that has not been persisted yet; saving one is an insert.
    pub fn has_placeholder_id(&self) -> bool {
        self.id.starts_with("new")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    pub name: String,
    pub whatsapp: String,
    pub address: String,
}

/// A line item attached to an order. `price` is the unit price snapshot
/// taken at order time and must never be recomputed from the current
/// product price.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub product_name: String,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer: Customer,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    #[serde(rename = "payment_status")]
    pub payment_status: PaymentStatus,
    /// Authoritative total; independent of the summed item prices.
    pub total: Decimal,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "data_agendamento", default, skip_serializing_if = "Option::is_none")]
    pub data_agendamento: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turno: Option<String>,
    #[serde(rename = "horario_agendamento", default, skip_serializing_if = "Option::is_none")]
    pub horario_agendamento: Option<String>,
}

impl Order {
    /// Short display id: the last six characters of the full id.
    pub fn short_id(&self) -> &str {
        let len = self.id.len();
        &self.id[len.saturating_sub(6)..]
    }
}
