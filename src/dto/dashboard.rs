use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::stats::{RevenuePoint, StatusCount, TopProduct, Window};

#[derive(Debug, Deserialize, ToSchema)]
pub struct WindowQuery {
    #[serde(default)]
    pub window: Window,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusDistribution {
    pub items: Vec<StatusCount>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RevenueSeries {
    pub items: Vec<RevenuePoint>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TopProducts {
    pub items: Vec<TopProduct>,
}
