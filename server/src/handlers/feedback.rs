use axum::extract::State;
use axum::response::IntoResponse;

use crate::models::NewFeedback;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::AppJson;
use crate::utils::response::acknowledged;

pub async fn submit_feedback(
    State(state): State<AppState>,
    AppJson(feedback): AppJson<NewFeedback>,
) -> Result<impl IntoResponse, AppError> {
    let feedback_id = state.repo.submit_feedback(&feedback).await?;

    tracing::info!(
        feedback_id,
        event_id = feedback.event_id,
        rating = feedback.rating,
        "Feedback recorded"
    );

    Ok(acknowledged("Feedback submitted!"))
}
