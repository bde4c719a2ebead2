use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::{events, feedback, health_check, registrations, reports, students};
use crate::state::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events/:id", get(events::get_event))
        .route("/events/:id/registrations", get(events::list_registrations))
        .route("/events/:id/stats", get(events::get_stats))
        .route("/registrations", post(registrations::register_student))
        .route("/feedback", post(feedback::submit_feedback))
        .route("/students", get(students::list_students))
        .route("/revenue-report", get(reports::revenue_report))
}

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(create_security_headers_layer())
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
}
