use reqwest::Response;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::types::{
    Acknowledgement, ErrorBody, EventDetail, EventRow, EventStats, FeedbackRequest,
    RegistrationRequest, RegistrationRow, RevenueRow, Student,
};

/// One method per API operation. Cloning is cheap and shares the
/// connection pool.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub async fn list_events(&self) -> Result<Vec<EventRow>, ClientError> {
        self.get("events").await
    }

    /// `None` when the API has no detail row for the id.
    pub async fn event_detail(&self, event_id: i64) -> Result<Option<EventDetail>, ClientError> {
        self.get(&format!("events/{event_id}")).await
    }

    pub async fn registrations(&self, event_id: i64) -> Result<Vec<RegistrationRow>, ClientError> {
        self.get(&format!("events/{event_id}/registrations")).await
    }

    pub async fn event_stats(&self, event_id: i64) -> Result<EventStats, ClientError> {
        self.get(&format!("events/{event_id}/stats")).await
    }

    pub async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<Acknowledgement, ClientError> {
        self.post("registrations", request).await
    }

    pub async fn submit_feedback(
        &self,
        request: &FeedbackRequest,
    ) -> Result<Acknowledgement, ClientError> {
        self.post("feedback", request).await
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, ClientError> {
        self.get("students").await
    }

    pub async fn revenue_report(&self) -> Result<Vec<RevenueRow>, ClientError> {
        self.get("revenue-report").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.config.url(path);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        decode(response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        debug!(%url, "POST");

        let response = self.http.post(&url).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let text = response.text().await?;
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    warn!(%status, %message, "API request failed");
    Err(ClientError::Api { status, message })
}
