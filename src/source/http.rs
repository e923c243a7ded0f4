//! HTTP listing source.
//!
//! Fetches the first page of the product listing with a single GET and
//! decodes the JSON body into a [`Listing`].

use async_trait::async_trait;
use tracing::debug;

use super::{FetchError, Listing, ListingSource};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// A listing source backed by a JSON HTTP endpoint.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    /// Create a source for the given listing endpoint
    /// (e.g. `https://dummyjson.com/products`).
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Decode a response body into a [`Listing`].
    ///
    /// Pure (no I/O) so the decoding rules can be tested without a server.
    pub fn decode(body: &[u8]) -> Result<Listing, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}

#[async_trait]
impl ListingSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    async fn fetch_listing(&self) -> Result<Listing, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        debug!(url = %self.url, bytes = body.len(), "received listing body");
        Self::decode(&body)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
