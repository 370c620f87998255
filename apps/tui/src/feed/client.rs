use thiserror::Error;

use super::models::FeedDocument;

/// Failure taxonomy for the single startup fetch.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    #[error("feed returned HTTP status {0}")]
    Status(u16),

    #[error("malformed feed payload: {0}")]
    Malformed(String),
}

/// Issues the one GET the dashboard performs at startup.
///
/// Cloneable so the event loop can hand a copy to the fetch task; no retry,
/// no cache, no polling.
#[derive(Debug, Clone)]
pub struct FeedClient {
    url: String,
    http: reqwest::Client,
}

impl FeedClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            http: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn fetch(&self) -> Result<FeedDocument, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| FeedError::Malformed(e.to_string()))
    }
}
