use axum::extract::State;
use axum::response::IntoResponse;

use crate::models::NewRegistration;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::extract::AppJson;
use crate::utils::response::acknowledged;

pub async fn register_student(
    State(state): State<AppState>,
    AppJson(registration): AppJson<NewRegistration>,
) -> Result<impl IntoResponse, AppError> {
    let reg_id = state.repo.register_student(&registration).await?;

    tracing::info!(
        reg_id,
        event_id = registration.event_id,
        student_id = registration.student_id,
        "Student registered"
    );

    Ok(acknowledged("Registration successful!"))
}
