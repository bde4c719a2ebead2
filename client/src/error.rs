use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status and its `{error}` body.
    #[error("{message} ({status})")]
    Api { status: StatusCode, message: String },

    #[error("event {0} not found")]
    EventNotFound(i64),

    /// A form was submitted with a required value missing.
    #[error("{0}")]
    IncompleteForm(&'static str),
}
