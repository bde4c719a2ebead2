use axum::extract::State;
use axum::Json;

use crate::models::RevenueEntry;
use crate::state::AppState;
use crate::utils::error::AppError;

pub async fn revenue_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<RevenueEntry>>, AppError> {
    let report = state.repo.revenue_report().await?;
    Ok(Json(report))
}
