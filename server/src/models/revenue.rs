use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Revenue for one event that has at least one paid ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RevenueEntry {
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}
