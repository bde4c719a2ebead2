use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::debug;

use super::{EventRepository, StoreError};
use crate::models::{
    EventDetail, EventStats, EventSummary, NewFeedback, NewRegistration, RegistrationEntry,
    RegistrationStatus, RevenueEntry, Student,
};

const LIST_EVENTS: &str = r"
    SELECT e.event_id, e.title, e.description, e.start_time, e.org_id, e.sponsor_id, e.venue_id,
           o.o_name AS organizer_name, s.sp_name AS sponsor_name, v.location, v.capacity
    FROM event e
    LEFT JOIN organizer o ON e.org_id = o.org_id
    LEFT JOIN sponsor s ON e.sponsor_id = s.sponsor_id
    LEFT JOIN venue v ON e.venue_id = v.venue_id
    ORDER BY e.event_id
";

const LIST_REGISTRATIONS: &str = r"
    SELECT r.reg_id, r.event_id, r.student_id, r.status, s.s_name, s.email
    FROM registration r
    JOIN student s ON r.student_id = s.student_id
    WHERE r.event_id = $1
    ORDER BY r.reg_id
";

const EVENT_REVENUE: &str = r"
    SELECT COALESCE(SUM(p.p_amount), 0)
    FROM event e
    LEFT JOIN ticket t ON e.event_id = t.event_id
    LEFT JOIN payment p ON t.payment_id = p.payment_id
    WHERE e.event_id = $1
";

const REVENUE_REPORT: &str = r"
    SELECT e.title, SUM(p.p_amount) AS total_revenue
    FROM event e
    JOIN ticket t ON e.event_id = t.event_id
    JOIN payment p ON t.payment_id = p.payment_id
    GROUP BY e.event_id, e.title
    ORDER BY e.event_id
";

/// [`EventRepository`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl EventRepository for PgRepository {
    async fn list_events(&self) -> Result<Vec<EventSummary>, StoreError> {
        let events = sqlx::query_as::<_, EventSummary>(LIST_EVENTS)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    async fn event_detail(&self, event_id: i64) -> Result<Option<EventDetail>, StoreError> {
        let detail = sqlx::query_as::<_, EventDetail>("SELECT * FROM event_details($1)")
            .bind(event_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(detail)
    }

    async fn list_registrations(
        &self,
        event_id: i64,
    ) -> Result<Vec<RegistrationEntry>, StoreError> {
        let registrations = sqlx::query_as::<_, RegistrationEntry>(LIST_REGISTRATIONS)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(registrations)
    }

    async fn event_stats(&self, event_id: i64) -> Result<EventStats, StoreError> {
        let total_registrations: Option<i64> =
            sqlx::query_scalar("SELECT total_registrations($1)")
                .bind(event_id)
                .fetch_one(&self.pool)
                .await?;

        let avg_rating: Option<Decimal> = sqlx::query_scalar("SELECT avg_event_rating($1)")
            .bind(event_id)
            .fetch_one(&self.pool)
            .await?;

        let total_revenue: Decimal = sqlx::query_scalar(EVENT_REVENUE)
            .bind(event_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(EventStats {
            total_registrations: total_registrations.unwrap_or(0),
            avg_rating: avg_rating.unwrap_or(Decimal::ZERO),
            total_revenue,
        })
    }

    async fn register_student(&self, registration: &NewRegistration) -> Result<i64, StoreError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO student (student_id, s_name, email) VALUES ($1, $2, $3) \
             ON CONFLICT (student_id) DO NOTHING",
        )
        .bind(registration.student_id)
        .bind(&registration.student_name)
        .bind(&registration.student_email)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if inserted == 0 {
            debug!(student_id = registration.student_id, "Student already known");
        }

        let reg_id: i64 = sqlx::query_scalar(
            "INSERT INTO registration (event_id, student_id, status) VALUES ($1, $2, $3) \
             RETURNING reg_id",
        )
        .bind(registration.event_id)
        .bind(registration.student_id)
        .bind(RegistrationStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(reg_id)
    }

    async fn submit_feedback(&self, feedback: &NewFeedback) -> Result<i64, StoreError> {
        let feedback_id: i64 = sqlx::query_scalar(
            "INSERT INTO feedback (event_id, student_id, rating, comments) \
             VALUES ($1, $2, $3, $4) RETURNING feedback_id",
        )
        .bind(feedback.event_id)
        .bind(feedback.student_id)
        .bind(feedback.rating)
        .bind(&feedback.comments)
        .fetch_one(&self.pool)
        .await?;

        Ok(feedback_id)
    }

    async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT student_id, s_name, email FROM student ORDER BY student_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(students)
    }

    async fn revenue_report(&self) -> Result<Vec<RevenueEntry>, StoreError> {
        let report = sqlx::query_as::<_, RevenueEntry>(REVENUE_REPORT)
            .fetch_all(&self.pool)
            .await?;
        Ok(report)
    }
}
