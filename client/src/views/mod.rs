//! HTML fragments for the four views. Rendering is pure; the async
//! loaders fetch and then hand the data to the renderers.

use chrono::{DateTime, Utc};

pub mod analytics;
pub mod events;
pub mod modal;
pub mod registration;

pub use analytics::{load_analytics, Analytics};
pub use events::load_events;
pub use modal::{Modal, ModalView};
pub use registration::RegistrationForm;

/// Average rating with one decimal and a star, or `empty` when there are
/// no ratings yet.
pub fn format_rating(avg_rating: f64, empty: &str) -> String {
    if avg_rating > 0.0 {
        format!("{:.1} ⭐", avg_rating)
    } else {
        empty.to_string()
    }
}

pub fn format_start_time(start_time: &DateTime<Utc>) -> String {
    start_time.format("%b %-d, %Y %H:%M").to_string()
}
