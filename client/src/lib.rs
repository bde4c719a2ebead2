//! Client for the EventHub API and the HTML views built from its responses.
//!
//! Every view re-fetches what it shows; nothing is cached between loads.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
pub mod views;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
