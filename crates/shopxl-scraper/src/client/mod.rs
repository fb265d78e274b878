//! HTTP client for a storefront's public `products.json` feed.

mod extract;
mod origin;

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;
use crate::types::FeedPage;

pub use origin::Origin;

/// Products requested per page. This is the feed's maximum page size.
pub const PAGE_SIZE: u32 = 250;

/// HTTP client for the public `products.json` feed.
///
/// Non-2xx responses and undecodable bodies are typed errors. Nothing is
/// retried: the first failure ends the run.
pub struct CatalogClient {
    client: Client,
    /// Pause between successive page requests, in milliseconds.
    inter_request_delay_ms: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with a per-request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            inter_request_delay_ms: 0,
        })
    }

    /// Sets the pause applied before every page request after the first.
    #[must_use]
    pub fn with_inter_request_delay(mut self, delay_ms: u64) -> Self {
        self.inter_request_delay_ms = delay_ms;
        self
    }

    /// Fetches one page of the feed. `page` is 1-based.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`]: any non-2xx status.
    /// - [`ScraperError::Http`]: network, TLS or timeout failure.
    /// - [`ScraperError::Deserialize`]: body is not the expected JSON.
    pub async fn fetch_page(&self, origin: &Origin, page: u32) -> Result<FeedPage, ScraperError> {
        let url = origin.products_url(PAGE_SIZE, page);
        tracing::debug!(url = %url, page, "requesting products page");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<FeedPage>(&body).map_err(|e| ScraperError::Deserialize {
            context: format!("page {page} from {origin}"),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
