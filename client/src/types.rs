//! Shapes of the API's JSON, as the client reads and writes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EventRow {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub organizer_name: Option<String>,
    pub sponsor_name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
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

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistrationRow {
    pub reg_id: i64,
    pub event_id: i64,
    pub student_id: i64,
    pub status: String,
    pub s_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EventStats {
    pub total_registrations: i64,
    pub avg_rating: f64,
    pub total_revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Student {
    pub student_id: i64,
    pub s_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevenueRow {
    pub title: String,
    pub total_revenue: f64,
}

/// `{success, message}` returned by the write endpoints.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Acknowledgement {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationRequest {
    pub event_id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub student_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackRequest {
    pub event_id: i64,
    pub student_id: i64,
    pub rating: u8,
    pub comments: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: String,
}
