//! Data access for the events API.
//!
//! Handlers only see [`EventRepository`]. Each operation maps to one query
//! or one call of a store routine; the store owns every business rule
//! (foreign keys, the rating range, idempotent student inserts).

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{
    EventDetail, EventStats, EventSummary, NewFeedback, NewRegistration, RegistrationEntry,
    RevenueEntry, Student,
};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryRepository;
pub use postgres::PgRepository;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    /// A constraint the store refused to accept.
    #[error("{0}")]
    Constraint(String),

    #[error("{0}")]
    Unavailable(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Every event with its organizer, sponsor and venue flattened in.
    async fn list_events(&self) -> Result<Vec<EventSummary>, StoreError>;

    /// First row of `event_details`, `None` when the routine yields nothing.
    async fn event_detail(&self, event_id: i64) -> Result<Option<EventDetail>, StoreError>;

    async fn list_registrations(&self, event_id: i64)
        -> Result<Vec<RegistrationEntry>, StoreError>;

    /// Registration count, average rating and revenue, each fetched
    /// separately. A failure in any of them fails the whole call.
    async fn event_stats(&self, event_id: i64) -> Result<EventStats, StoreError>;

    /// Inserts the student if the id is unknown, then a `Pending`
    /// registration. Returns the registration id.
    async fn register_student(&self, registration: &NewRegistration) -> Result<i64, StoreError>;

    /// Returns the feedback id. Repeated submissions are all kept.
    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<i64, StoreError>;

    async fn list_students(&self) -> Result<Vec<Student>, StoreError>;

    /// Revenue per event. Events without tickets are left out, unlike
    /// [`EventRepository::event_stats`] which reports zero for them.
    async fn revenue_report(&self) -> Result<Vec<RevenueEntry>, StoreError>;
}
