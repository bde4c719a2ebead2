use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the events listing: the event joined with its organizer,
/// sponsor and venue. Optional relations come back as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventSummary {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub org_id: i64,
    pub sponsor_id: Option<i64>,
    pub venue_id: Option<i64>,
    pub organizer_name: Option<String>,
    pub sponsor_name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

/// Row produced by the `event_details` routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct EventDetail {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub organizer: Option<String>,
    pub sponsor: Option<String>,
    pub venue: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventStats {
    pub total_registrations: i64,
    /// Zero when the event has no feedback yet.
    #[serde(with = "rust_decimal::serde::float")]
    pub avg_rating: Decimal,
    /// Zero when the event has no paid tickets.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_revenue: Decimal,
}
