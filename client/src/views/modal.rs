//! The single overlay shared by the event detail and the feedback form.
//!
//! [`Modal`] records which of the two is open and for which event, so the
//! feedback submit never has to look the event up anywhere else.

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::types::{Acknowledgement, EventDetail, EventStats, FeedbackRequest, RegistrationRow};
use crate::views::{format_rating, format_start_time};

/// Title and body to place into the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Detail {
        event_id: i64,
    },
    Feedback {
        event_id: i64,
        draft: FeedbackDraft,
    },
}

impl Modal {
    pub fn event_id(&self) -> Option<i64> {
        match self {
            Modal::Closed => None,
            Modal::Detail { event_id } | Modal::Feedback { event_id, .. } => Some(*event_id),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }

    /// Fetches detail, roster and stats concurrently and switches to the
    /// detail display. On failure the modal keeps its previous state.
    pub async fn open_detail(
        &mut self,
        client: &ApiClient,
        event_id: i64,
    ) -> Result<ModalView, ClientError> {
        let (detail, registrations, stats) = tokio::try_join!(
            client.event_detail(event_id),
            client.registrations(event_id),
            client.event_stats(event_id),
        )?;
        let detail = detail.ok_or(ClientError::EventNotFound(event_id))?;

        *self = Modal::Detail { event_id };
        Ok(render_detail(&detail, &registrations, &stats))
    }

    pub fn open_feedback(&mut self, event_id: i64) -> ModalView {
        *self = Modal::Feedback {
            event_id,
            draft: FeedbackDraft::default(),
        };

        ModalView {
            title: "Submit Feedback".to_string(),
            body: render_feedback_form(None),
        }
    }

    /// Records the chosen star and returns the re-rendered stars. Ignored
    /// unless the feedback form is open.
    pub fn set_rating(&mut self, rating: u8) -> Option<String> {
        match self {
            Modal::Feedback { draft, .. } => {
                draft.rating = Some(rating);
                Some(render_stars(Some(rating)))
            }
            _ => None,
        }
    }

    /// Sends the feedback for the event the form was opened for and closes
    /// the modal once the API accepts it.
    pub async fn submit_feedback(
        &mut self,
        client: &ApiClient,
        student_id: Option<i64>,
        comments: &str,
    ) -> Result<Acknowledgement, ClientError> {
        let (event_id, draft) = match self {
            Modal::Feedback { event_id, draft } => (*event_id, draft),
            _ => return Err(ClientError::IncompleteForm("No feedback form is open")),
        };
        let rating = draft
            .rating
            .ok_or(ClientError::IncompleteForm("Choose a rating"))?;
        let student_id = student_id.ok_or(ClientError::IncompleteForm("Student ID is required"))?;

        let request = FeedbackRequest {
            event_id,
            student_id,
            rating,
            comments: (!comments.is_empty()).then(|| comments.to_string()),
        };
        let ack = client.submit_feedback(&request).await?;

        self.close();
        Ok(ack)
    }
}

pub fn render_detail(
    detail: &EventDetail,
    registrations: &[RegistrationRow],
    stats: &EventStats,
) -> ModalView {
    let roster = if registrations.is_empty() {
        "<p>No registrations yet.</p>".to_string()
    } else {
        let rows: String = registrations
            .iter()
            .map(|registration| {
                let color = if registration.status == "Confirmed" {
                    "green"
                } else {
                    "orange"
                };
                format!(
                    r#"<tr><td>{}</td><td>{}</td><td><span style="color: {};">{}</span></td></tr>"#,
                    registration.s_name, registration.email, color, registration.status
                )
            })
            .collect();
        format!(
            "<table><thead><tr><th>Student Name</th><th>Email</th><th>Status</th></tr></thead><tbody>{rows}</tbody></table>"
        )
    };

    let body = format!(
        r#"<div class="event-details">
    <p><strong>Description:</strong> {description}</p>
    <p><strong>When:</strong> {start}</p>
    <p><strong>Organizer:</strong> {organizer}</p>
    <p><strong>Sponsor:</strong> {sponsor}</p>
    <p><strong>Venue:</strong> {venue}</p>
    <div class="stats">
        <h4>Event Statistics</h4>
        <p>Total Registrations: {registrations_total}</p>
        <p>Average Rating: {rating}</p>
        <p>Total Revenue: ${revenue}</p>
    </div>
    <div class="registrations">
        <h4>Registrations ({roster_len})</h4>
        {roster}
    </div>
</div>
"#,
        description = detail.description.as_deref().unwrap_or(""),
        start = format_start_time(&detail.start_time),
        organizer = detail.organizer.as_deref().unwrap_or(""),
        sponsor = detail.sponsor.as_deref().unwrap_or("None"),
        venue = detail.venue.as_deref().unwrap_or("TBA"),
        registrations_total = stats.total_registrations,
        rating = format_rating(stats.avg_rating, "No ratings yet"),
        revenue = stats.total_revenue,
        roster_len = registrations.len(),
        roster = roster,
    );

    ModalView {
        title: detail.title.clone(),
        body,
    }
}

fn render_stars(rating: Option<u8>) -> String {
    let stars: String = (1..=5u8)
        .map(|star| {
            let active = rating.is_some_and(|rating| star <= rating);
            let class = if active { r#" class="active""# } else { "" };
            format!(r#"<span data-rating="{star}"{class}>★</span>"#)
        })
        .collect();
    format!(r#"<div class="rating-stars" id="rating-stars">{stars}</div>"#)
}

fn render_feedback_form(rating: Option<u8>) -> String {
    format!(
        r#"<form id="feedback-form" class="feedback-form">
    <div class="form-group">
        <label for="feedback-student-id">Student ID:</label>
        <input type="number" id="feedback-student-id" required>
    </div>
    <div class="form-group">
        <label>Rating:</label>
        {stars}
    </div>
    <div class="form-group">
        <label for="comments">Comments:</label>
        <textarea id="comments" rows="4"></textarea>
    </div>
    <button type="submit">Submit Feedback</button>
</form>
"#,
        stars = render_stars(rating)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> EventDetail {
        EventDetail {
            event_id: 1,
            title: "RustConf Campus".to_string(),
            description: Some("Talks".to_string()),
            start_time: "2024-05-01T10:00:00Z".parse().unwrap(),
            organizer: Some("ACM".to_string()),
            sponsor: None,
            venue: Some("Hall A".to_string()),
            capacity: Some(100),
        }
    }

    fn registration(status: &str) -> RegistrationRow {
        RegistrationRow {
            reg_id: 1,
            event_id: 1,
            student_id: 42,
            status: status.to_string(),
            s_name: "Ada".to_string(),
            email: "ada@x.com".to_string(),
        }
    }

    #[test]
    fn test_feedback_tracks_its_event() {
        let mut modal = Modal::default();
        assert!(!modal.is_open());

        let view = modal.open_feedback(7);
        assert_eq!(view.title, "Submit Feedback");
        assert_eq!(modal.event_id(), Some(7));

        modal.open_feedback(9);
        assert_eq!(modal.event_id(), Some(9));

        modal.close();
        assert_eq!(modal.event_id(), None);
    }

    #[test]
    fn test_set_rating_only_in_feedback_mode() {
        let mut modal = Modal::Detail { event_id: 1 };
        assert!(modal.set_rating(4).is_none());

        modal.open_feedback(1);
        let stars = modal.set_rating(3).unwrap();
        assert_eq!(stars.matches(r#"class="active""#).count(), 3);
        assert_eq!(
            modal,
            Modal::Feedback {
                event_id: 1,
                draft: FeedbackDraft { rating: Some(3) }
            }
        );
    }

    #[test]
    fn test_detail_without_ratings_or_registrations() {
        let stats = EventStats {
            total_registrations: 0,
            avg_rating: 0.0,
            total_revenue: 0.0,
        };

        let view = render_detail(&detail(), &[], &stats);
        assert_eq!(view.title, "RustConf Campus");
        assert!(view.body.contains("Average Rating: No ratings yet"));
        assert!(view.body.contains("No registrations yet."));
        assert!(view.body.contains("Total Revenue: $0"));
        assert!(view.body.contains("<strong>Sponsor:</strong> None"));
    }

    #[test]
    fn test_detail_colors_status() {
        let stats = EventStats {
            total_registrations: 2,
            avg_rating: 4.5,
            total_revenue: 25.0,
        };

        let view = render_detail(
            &detail(),
            &[registration("Confirmed"), registration("Pending")],
            &stats,
        );
        assert!(view.body.contains("Registrations (2)"));
        assert!(view.body.contains(r#"<span style="color: green;">Confirmed</span>"#));
        assert!(view.body.contains(r#"<span style="color: orange;">Pending</span>"#));
        assert!(view.body.contains("Average Rating: 4.5 ⭐"));
    }
}
