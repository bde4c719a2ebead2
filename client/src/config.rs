use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:3000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Where the API lives and how long a request may take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Reads `EVENTHUB_API_BASE` and `EVENTHUB_API_TIMEOUT_SECS`, falling
    /// back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let base_url = env::var("EVENTHUB_API_BASE").unwrap_or(defaults.base_url);
        let timeout = env::var("EVENTHUB_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.trim().parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self { base_url, timeout }
    }

    /// Joins `path` onto the base URL without doubling slashes.
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
