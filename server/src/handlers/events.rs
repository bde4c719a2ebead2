use axum::extract::State;
use axum::Json;

use crate::models::{EventDetail, EventStats, EventSummary, RegistrationEntry};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::AppPath;

pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    let events = state.repo.list_events().await?;
    Ok(Json(events))
}

/// Responds with `null` when the detail routine has no row for the id.
pub async fn get_event(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i64>,
) -> Result<Json<Option<EventDetail>>, AppError> {
    let detail = state.repo.event_detail(event_id).await?;
    if detail.is_none() {
        tracing::debug!(event_id, "No detail row for event");
    }
    Ok(Json(detail))
}

pub async fn list_registrations(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i64>,
) -> Result<Json<Vec<RegistrationEntry>>, AppError> {
    let registrations = state.repo.list_registrations(event_id).await?;
    Ok(Json(registrations))
}

pub async fn get_stats(
    State(state): State<AppState>,
    AppPath(event_id): AppPath<i64>,
) -> Result<Json<EventStats>, AppError> {
    let stats = state.repo.event_stats(event_id).await?;
    Ok(Json(stats))
}
