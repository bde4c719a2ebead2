use axum::{response::IntoResponse, response::Response, Json};
use serde::Serialize;

pub mod events;
pub mod feedback;
pub mod registrations;
pub mod reports;
pub mod students;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "eventhub-api",
    };

    Json(payload).into_response()
}
