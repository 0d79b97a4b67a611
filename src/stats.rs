//! Pure aggregate computations over the mirrored order list. Nothing here
//! caches: every call recomputes from the slice it is given, so results are
//! a function of the input and the supplied `now` alone.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Order, OrderStatus, PaymentStatus};

const TOP_PRODUCT_LIMIT: usize = 5;

/// Trailing calendar-day range scoping the aggregate statistics: N days
/// counted inclusively, so "today" starts at local midnight and "7d" at
/// midnight six days before today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Window {
    #[serde(rename = "today")]
    Today,
    #[serde(rename = "7d")]
    Last7Days,
    #[serde(rename = "30d")]
    Last30Days,
}

impl Default for Window {
    fn default() -> Self {
        Window::Today
    }
}

impl Window {
    pub fn start(self, now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
        let days_back = match self {
            Window::Today => 0,
            Window::Last7Days => 6,
            Window::Last30Days => 29,
        };
        let day = now.date_naive() - Duration::days(days_back);
        let local_midnight = day.and_time(NaiveTime::MIN);
        let offset = now.timezone();
        let naive_utc = local_midnight - Duration::seconds(i64::from(offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(naive_utc, offset)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub total_pedidos: i64,
    /// Revenue counts paid orders only, whatever their fulfillment status.
    pub faturamento: Decimal,
    pub pedidos_pendentes: i64,
    pub pedidos_concluidos: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: OrderStatus,
    pub pedidos: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RevenuePoint {
    pub date: NaiveDate,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
    pub revenue: Decimal,
}

fn in_window(order: &Order, start: DateTime<FixedOffset>, now: DateTime<FixedOffset>) -> bool {
    let created = order.created_at.with_timezone(&now.timezone());
    created >= start && created <= now
}

pub fn daily_summary(orders: &[Order], window: Window, now: DateTime<FixedOffset>) -> DailySummary {
    let start = window.start(now);
    let windowed: Vec<&Order> = orders.iter().filter(|o| in_window(o, start, now)).collect();

    let faturamento = windowed
        .iter()
        .filter(|o| o.payment_status == PaymentStatus::Pago)
        .map(|o| o.total)
        .sum::<Decimal>();

    DailySummary {
        total_pedidos: windowed.len() as i64,
        faturamento,
        pedidos_pendentes: windowed
            .iter()
            .filter(|o| !matches!(o.status, OrderStatus::Concluido | OrderStatus::Cancelado))
            .count() as i64,
        pedidos_concluidos: windowed
            .iter()
            .filter(|o| o.status == OrderStatus::Concluido)
            .count() as i64,
    }
}

/// All-orders histogram, not scoped by the window; one entry per status
/// actually observed.
pub fn status_distribution(orders: &[Order]) -> Vec<StatusCount> {
    let mut counts: HashMap<OrderStatus, i64> = HashMap::new();
    for order in orders {
        *counts.entry(order.status).or_insert(0) += 1;
    }
    OrderStatus::ALL
        .iter()
        .filter_map(|status| {
            counts.get(status).map(|pedidos| StatusCount {
                status: *status,
                pedidos: *pedidos,
            })
        })
        .collect()
}

/// Paid orders in the window grouped by local calendar date, ascending.
/// Unpaid orders are excluded entirely; missing days are not zero-filled.
pub fn revenue_series(
    orders: &[Order],
    window: Window,
    now: DateTime<FixedOffset>,
) -> Vec<RevenuePoint> {
    let start = window.start(now);
    let mut by_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for order in orders
        .iter()
        .filter(|o| in_window(o, start, now) && o.payment_status == PaymentStatus::Pago)
    {
        let date = order.created_at.with_timezone(&now.timezone()).date_naive();
        *by_day.entry(date).or_insert(Decimal::ZERO) += order.total;
    }
    by_day
        .into_iter()
        .map(|(date, total)| RevenuePoint { date, total })
        .collect()
}

/// Best sellers in the window, ranked by total quantity descending and cut
/// to five. Quantity ties keep first-seen input order (the sort is stable);
/// no secondary key is defined.
pub fn top_products(
    orders: &[Order],
    window: Window,
    now: DateTime<FixedOffset>,
) -> Vec<TopProduct> {
    let start = window.start(now);
    let mut ranked: Vec<TopProduct> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in orders.iter().filter(|o| in_window(o, start, now)) {
        for item in &order.items {
            let line_revenue = Decimal::from(item.quantity) * item.price;
            match index.get(&item.product_id) {
                Some(&at) => {
                    ranked[at].quantity += i64::from(item.quantity);
                    ranked[at].revenue += line_revenue;
                }
                None => {
                    index.insert(item.product_id.clone(), ranked.len());
                    ranked.push(TopProduct {
                        product_id: item.product_id.clone(),
                        name: item.product_name.clone(),
                        quantity: i64::from(item.quantity),
                        revenue: line_revenue,
                    });
                }
            }
        }
    }

    ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranked.truncate(TOP_PRODUCT_LIMIT);
    ranked
}
