use crate::api::ApiClient;
use crate::error::ClientError;
use crate::types::EventRow;
use crate::views::format_start_time;

/// Fetches the events and renders their cards.
pub async fn load_events(client: &ApiClient) -> Result<String, ClientError> {
    let events = client.list_events().await?;
    Ok(render_event_cards(&events))
}

pub fn render_event_cards(events: &[EventRow]) -> String {
    events.iter().map(render_event_card).collect()
}

fn render_event_card(event: &EventRow) -> String {
    let venue = match (&event.location, event.capacity) {
        (Some(location), Some(capacity)) => format!("{location} (Capacity: {capacity})"),
        (Some(location), None) => location.clone(),
        _ => "TBA".to_string(),
    };

    format!(
        r#"<div class="event-card">
    <h3>{title}</h3>
    <p><strong>Description:</strong> {description}</p>
    <p><strong>Organizer:</strong> {organizer}</p>
    <p><strong>Sponsor:</strong> {sponsor}</p>
    <p><strong>Venue:</strong> {venue}</p>
    <div class="event-meta">
        <span>📅 {start}</span>
        <div>
            <button class="btn btn-primary" data-action="view-details" data-event-id="{id}">View Details</button>
            <button class="btn btn-secondary" data-action="give-feedback" data-event-id="{id}">Give Feedback</button>
        </div>
    </div>
</div>
"#,
        title = event.title,
        description = event.description.as_deref().unwrap_or(""),
        organizer = event.organizer_name.as_deref().unwrap_or(""),
        sponsor = event.sponsor_name.as_deref().unwrap_or("None"),
        venue = venue,
        start = format_start_time(&event.start_time),
        id = event.event_id,
    )
}
