use std::collections::HashMap;

use futures::future::try_join_all;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::types::{EventRow, EventStats, RevenueRow};
use crate::views::format_rating;

/// Everything the analytics view shows, each event already paired with its
/// own stats.
#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub cards: Vec<(EventRow, EventStats)>,
    pub revenue: Vec<RevenueRow>,
}

/// Loads events and the revenue report together, then the stats of every
/// event concurrently. A single failed fetch fails the whole view.
pub async fn load_analytics(client: &ApiClient) -> Result<Analytics, ClientError> {
    let (events, revenue) = tokio::try_join!(client.list_events(), client.revenue_report())?;

    let stats = try_join_all(events.iter().map(|event| {
        let event_id = event.event_id;
        async move {
            let stats = client.event_stats(event_id).await?;
            Ok::<_, ClientError>((event_id, stats))
        }
    }))
    .await?;

    Ok(Analytics::assemble(events, stats, revenue))
}

impl Analytics {
    /// Pairs stats to events by id, whatever order the stats arrived in.
    /// Events without stats are dropped.
    pub fn assemble(
        events: Vec<EventRow>,
        stats: Vec<(i64, EventStats)>,
        revenue: Vec<RevenueRow>,
    ) -> Self {
        let mut by_event: HashMap<i64, EventStats> = stats.into_iter().collect();
        let cards = events
            .into_iter()
            .filter_map(|event| by_event.remove(&event.event_id).map(|stats| (event, stats)))
            .collect();

        Self { cards, revenue }
    }

    pub fn render_stats_grid(&self) -> String {
        self.cards
            .iter()
            .map(|(event, stats)| {
                format!(
                    r#"<div class="stat-card">
    <h3>{}</h3>
    <p>Registrations for {}</p>
    <p>Rating: {}</p>
    <p>Revenue: ${}</p>
</div>
"#,
                    stats.total_registrations,
                    event.title,
                    format_rating(stats.avg_rating, "N/A"),
                    stats.total_revenue,
                )
            })
            .collect()
    }

    pub fn render_revenue_table(&self) -> String {
        self.revenue
            .iter()
            .map(|row| format!("<tr><td>{}</td><td>${}</td></tr>", row.title, row.total_revenue))
            .collect()
    }
}
