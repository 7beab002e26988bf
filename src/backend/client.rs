//! HTTP client for the query backend.

use std::time::Instant;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use super::{Endpoint, QueryBackend, QueryReply, QueryRequest};
use crate::error::BackendError;

/// `reqwest` client bound to one backend's `/query` URL.
///
/// # Example
///
/// ```rust,no_run
/// use mongomuse::backend::{Endpoint, QueryBackend, QueryClient};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = QueryClient::new(&Endpoint::new("localhost", 3000))?;
/// let reply = client.query("list all databases in testbedmongo!").await?;
/// println!("{:?}", reply.response);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct QueryClient {
    url: Url,
    http: reqwest::Client,
}

impl QueryClient {
    /// Create a client for the given endpoint.
    pub fn new(endpoint: &Endpoint) -> Result<Self, BackendError> {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(endpoint: &Endpoint, http: reqwest::Client) -> Result<Self, BackendError> {
        Ok(Self {
            url: endpoint.query_url()?,
            http,
        })
    }

    /// The `/query` URL requests are sent to.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl QueryBackend for QueryClient {
    async fn query(&self, text: &str) -> Result<QueryReply, BackendError> {
        let started = Instant::now();

        let response = self
            .http
            .post(self.url.clone())
            .json(&QueryRequest { query: text })
            .send()
            .await?;

        // Status codes are not interpreted; the body decides.
        let status = response.status();
        if !status.is_success() {
            warn!(
                name: "backend.query.status",
                status = status.as_u16(),
                url = %self.url,
                "Backend answered with a non-success status"
            );
        }

        let body = response.bytes().await?;
        let value: Value = serde_json::from_slice(&body)?;
        let reply = QueryReply::from_json(&value);

        debug!(
            name: "backend.query.completed",
            elapsed_ms = started.elapsed().as_millis() as u64,
            usable = reply.response.is_some(),
            "Backend query completed"
        );

        Ok(reply)
    }
}
