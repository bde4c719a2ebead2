//! In-process [`EventRepository`] used by tests and local demos.
//!
//! Mirrors the relational schema closely enough to exercise the API
//! contract: foreign keys are checked, student inserts are idempotent, the
//! rating range is enforced, and the revenue report uses inner-join
//! semantics while per-event stats default to zero.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use super::{EventRepository, StoreError};
use crate::models::{
    EventDetail, EventStats, EventSummary, NewFeedback, NewRegistration, RegistrationEntry,
    RegistrationStatus, RevenueEntry, Student,
};

/// Seed data for one event row.
#[derive(Debug, Clone)]
pub struct EventRecord {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_time: DateTime<Utc>,
    pub org_id: i64,
    pub sponsor_id: Option<i64>,
    pub venue_id: Option<i64>,
}

#[derive(Debug, Clone)]
struct Venue {
    location: String,
    capacity: i32,
}

#[derive(Debug, Clone)]
struct Registration {
    reg_id: i64,
    event_id: i64,
    student_id: i64,
    status: RegistrationStatus,
}

#[derive(Debug, Clone)]
struct Feedback {
    event_id: i64,
    rating: i32,
}

#[derive(Debug, Clone)]
struct Ticket {
    event_id: i64,
    payment_id: Option<i64>,
}

#[derive(Debug, Default)]
struct Tables {
    organizers: BTreeMap<i64, String>,
    sponsors: BTreeMap<i64, String>,
    venues: BTreeMap<i64, Venue>,
    events: BTreeMap<i64, EventRecord>,
    students: BTreeMap<i64, Student>,
    registrations: Vec<Registration>,
    feedback: Vec<Feedback>,
    payments: BTreeMap<i64, Decimal>,
    tickets: BTreeMap<i64, Ticket>,
    next_reg_id: i64,
    next_feedback_id: i64,
    unavailable: Option<String>,
}

impl Tables {
    fn check_available(&self) -> Result<(), StoreError> {
        match &self.unavailable {
            Some(reason) => Err(StoreError::Unavailable(reason.clone())),
            None => Ok(()),
        }
    }

    fn require_event(&self, event_id: i64) -> Result<(), StoreError> {
        if self.events.contains_key(&event_id) {
            Ok(())
        } else {
            Err(StoreError::Constraint(format!(
                "event {} does not exist",
                event_id
            )))
        }
    }

    fn require_student(&self, student_id: i64) -> Result<(), StoreError> {
        if self.students.contains_key(&student_id) {
            Ok(())
        } else {
            Err(StoreError::Constraint(format!(
                "student {} does not exist",
                student_id
            )))
        }
    }

    /// Amounts of every paid ticket of an event.
    fn ticket_amounts(&self, event_id: i64) -> Vec<Decimal> {
        self.tickets
            .values()
            .filter(|ticket| ticket.event_id == event_id)
            .filter_map(|ticket| ticket.payment_id)
            .filter_map(|payment_id| self.payments.get(&payment_id).copied())
            .collect()
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_organizer(&self, org_id: i64, name: impl Into<String>) {
        self.tables.lock().await.organizers.insert(org_id, name.into());
    }

    pub async fn add_sponsor(&self, sponsor_id: i64, name: impl Into<String>) {
        self.tables.lock().await.sponsors.insert(sponsor_id, name.into());
    }

    pub async fn add_venue(&self, venue_id: i64, location: impl Into<String>, capacity: i32) {
        self.tables.lock().await.venues.insert(
            venue_id,
            Venue {
                location: location.into(),
                capacity,
            },
        );
    }

    pub async fn add_event(&self, event: EventRecord) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;

        if !tables.organizers.contains_key(&event.org_id) {
            return Err(StoreError::Constraint(format!(
                "organizer {} does not exist",
                event.org_id
            )));
        }
        if let Some(sponsor_id) = event.sponsor_id {
            if !tables.sponsors.contains_key(&sponsor_id) {
                return Err(StoreError::Constraint(format!(
                    "sponsor {} does not exist",
                    sponsor_id
                )));
            }
        }
        if let Some(venue_id) = event.venue_id {
            if !tables.venues.contains_key(&venue_id) {
                return Err(StoreError::Constraint(format!(
                    "venue {} does not exist",
                    venue_id
                )));
            }
        }

        tables.events.insert(event.event_id, event);
        Ok(())
    }

    pub async fn add_payment(&self, payment_id: i64, amount: Decimal) {
        self.tables.lock().await.payments.insert(payment_id, amount);
    }

    pub async fn add_ticket(
        &self,
        ticket_id: i64,
        event_id: i64,
        payment_id: Option<i64>,
    ) -> Result<(), StoreError> {
        let mut tables = self.tables.lock().await;
        tables.require_event(event_id)?;
        if let Some(payment_id) = payment_id {
            if !tables.payments.contains_key(&payment_id) {
                return Err(StoreError::Constraint(format!(
                    "payment {} does not exist",
                    payment_id
                )));
            }
        }

        tables.tickets.insert(
            ticket_id,
            Ticket {
                event_id,
                payment_id,
            },
        );
        Ok(())
    }

    /// Makes every later operation fail with `reason`, or restores service
    /// when `reason` is `None`.
    pub async fn set_unavailable(&self, reason: Option<String>) {
        self.tables.lock().await.unavailable = reason;
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn list_events(&self) -> Result<Vec<EventSummary>, StoreError> {
        let tables = self.tables.lock().await;
        tables.check_available()?;

        let events = tables
            .events
            .values()
            .map(|event| {
                let venue = event.venue_id.and_then(|id| tables.venues.get(&id));
                EventSummary {
                    event_id: event.event_id,
                    title: event.title.clone(),
                    description: event.description.clone(),
                    start_time: event.start_time,
                    org_id: event.org_id,
                    sponsor_id: event.sponsor_id,
                    venue_id: event.venue_id,
                    organizer_name: tables.organizers.get(&event.org_id).cloned(),
                    sponsor_name: event
                        .sponsor_id
                        .and_then(|id| tables.sponsors.get(&id).cloned()),
                    location: venue.map(|v| v.location.clone()),
                    capacity: venue.map(|v| v.capacity),
                }
            })
            .collect();

        Ok(events)
    }

    async fn event_detail(&self, event_id: i64) -> Result<Option<EventDetail>, StoreError> {
        let tables = self.tables.lock().await;
        tables.check_available()?;

        let detail = tables.events.get(&event_id).map(|event| {
            let venue = event.venue_id.and_then(|id| tables.venues.get(&id));
            EventDetail {
                event_id: event.event_id,
                title: event.title.clone(),
                description: event.description.clone(),
                start_time: event.start_time,
                organizer: tables.organizers.get(&event.org_id).cloned(),
                sponsor: event
                    .sponsor_id
                    .and_then(|id| tables.sponsors.get(&id).cloned()),
                venue: venue.map(|v| v.location.clone()),
                capacity: venue.map(|v| v.capacity),
            }
        });

        Ok(detail)
    }

    async fn list_registrations(
        &self,
        event_id: i64,
    ) -> Result<Vec<RegistrationEntry>, StoreError> {
        let tables = self.tables.lock().await;
        tables.check_available()?;

        let registrations = tables
            .registrations
            .iter()
            .filter(|registration| registration.event_id == event_id)
            .filter_map(|registration| {
                tables
                    .students
                    .get(&registration.student_id)
                    .map(|student| RegistrationEntry {
                        reg_id: registration.reg_id,
                        event_id: registration.event_id,
                        student_id: registration.student_id,
                        status: registration.status.as_str().to_string(),
                        s_name: student.s_name.clone(),
                        email: student.email.clone(),
                    })
            })
            .collect();

        Ok(registrations)
    }

    async fn event_stats(&self, event_id: i64) -> Result<EventStats, StoreError> {
        let tables = self.tables.lock().await;
        tables.check_available()?;

        let total_registrations = tables
            .registrations
            .iter()
            .filter(|registration| registration.event_id == event_id)
            .count() as i64;

        let ratings: Vec<i32> = tables
            .feedback
            .iter()
            .filter(|feedback| feedback.event_id == event_id)
            .map(|feedback| feedback.rating)
            .collect();
        let avg_rating = if ratings.is_empty() {
            Decimal::ZERO
        } else {
            let sum: i64 = ratings.iter().map(|rating| i64::from(*rating)).sum();
            Decimal::from(sum) / Decimal::from(ratings.len() as i64)
        };

        let total_revenue = tables.ticket_amounts(event_id).into_iter().sum();

        Ok(EventStats {
            total_registrations,
            avg_rating,
            total_revenue,
        })
    }

    async fn register_student(&self, registration: &NewRegistration) -> Result<i64, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_available()?;
        tables.require_event(registration.event_id)?;

        tables
            .students
            .entry(registration.student_id)
            .or_insert_with(|| Student {
                student_id: registration.student_id,
                s_name: registration.student_name.clone(),
                email: registration.student_email.clone(),
            });

        tables.next_reg_id += 1;
        let reg_id = tables.next_reg_id;
        tables.registrations.push(Registration {
            reg_id,
            event_id: registration.event_id,
            student_id: registration.student_id,
            status: RegistrationStatus::Pending,
        });

        Ok(reg_id)
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<i64, StoreError> {
        let mut tables = self.tables.lock().await;
        tables.check_available()?;
        tables.require_event(feedback.event_id)?;
        tables.require_student(feedback.student_id)?;

        if !(1..=5).contains(&feedback.rating) {
            return Err(StoreError::Constraint(format!(
                "rating {} is outside 1..=5",
                feedback.rating
            )));
        }

        tables.next_feedback_id += 1;
        let feedback_id = tables.next_feedback_id;
        tables.feedback.push(Feedback {
            event_id: feedback.event_id,
            rating: feedback.rating,
        });

        Ok(feedback_id)
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let tables = self.tables.lock().await;
        tables.check_available()?;

        Ok(tables.students.values().cloned().collect())
    }

    async fn revenue_report(&self) -> Result<Vec<RevenueEntry>, StoreError> {
        let tables = self.tables.lock().await;
        tables.check_available()?;

        let report = tables
            .events
            .values()
            .filter_map(|event| {
                let amounts = tables.ticket_amounts(event.event_id);
                if amounts.is_empty() {
                    None
                } else {
                    Some(RevenueEntry {
                        title: event.title.clone(),
                        total_revenue: amounts.into_iter().sum(),
                    })
                }
            })
            .collect();

        Ok(report)
    }
}
