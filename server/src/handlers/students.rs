use axum::extract::State;
use axum::Json;

use crate::models::Student;
use crate::state::AppState;
use crate::utils::error::AppError;

pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.repo.list_students().await?;
    Ok(Json(students))
}
