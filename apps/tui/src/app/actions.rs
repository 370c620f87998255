use crate::config;
use crate::feed::{FeedClient, FeedDocument, FeedError};

/// Side-effectful collaborators the app drives: the feed endpoint and its
/// HTTP client.
#[derive(Debug)]
pub struct AppActions {
    client: FeedClient,
}

impl AppActions {
    pub fn new() -> Self {
        Self {
            client: FeedClient::new(config::DEFAULT_FEED_URL.to_string()),
        }
    }

    /// Re-reads configuration; env/CLI overrides land here.
    pub fn initialize(&mut self) {
        self.client = FeedClient::new(config::feed_url());
    }

    pub async fn fetch_feed(&self) -> Result<FeedDocument, FeedError> {
        self.client.fetch().await
    }

    /// A clone the event loop can move into the fetch task.
    pub fn feed_client(&self) -> FeedClient {
        self.client.clone()
    }
}

impl Default for AppActions {
    fn default() -> Self {
        Self::new()
    }
}
