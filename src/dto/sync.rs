use serde::Serialize;
use utoipa::ToSchema;

/// Mirror sizes plus the single current error, if any.
#[derive(Debug, Serialize, ToSchema)]
pub struct SyncStatus {
    pub categories: i64,
    pub products: i64,
    pub orders: i64,
    pub error: Option<String>,
}
