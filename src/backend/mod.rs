//! Query backend: the remote service the widget forwards user text to.
//!
//! The wire protocol is a single JSON exchange:
//!
//! ```text
//! POST http://<host>:<port>/query
//! {"query": "<text>"}
//!
//! 200 OK
//! {"response": "<answer>"}
//! ```
//!
//! Any response shape without a non-empty string `response` field is
//! tolerated and reported as "no usable response".
//!
//! # Modules
//!
//! - [`client`]: `reqwest`-based [`QueryBackend`] implementation

pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::BackendError;

pub use client::QueryClient;

/// Host used when no backend host is configured.
pub const DEFAULT_BACKEND_HOST: &str = "localhost";

/// Port used when no backend port is configured.
pub const DEFAULT_BACKEND_PORT: u16 = 3000;

/// Location of the query backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Backend host name or address.
    pub host: String,
    /// Backend TCP port.
    pub port: u16,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self {
            host: DEFAULT_BACKEND_HOST.to_string(),
            port: DEFAULT_BACKEND_PORT,
        }
    }
}

impl Endpoint {
    /// Create an endpoint for the given host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// URL of the `/query` route on this endpoint.
    pub fn query_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&format!("http://{}:{}/query", self.host, self.port))
    }
}

/// Request body sent to `/query`.
#[derive(Debug, Serialize)]
pub struct QueryRequest<'a> {
    /// The user's text, untrimmed.
    pub query: &'a str,
}

/// Usable part of a backend reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryReply {
    /// The `response` field, when it was a non-empty string.
    pub response: Option<String>,
}

impl QueryReply {
    /// Reply carrying an answer.
    pub fn answer(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
        }
    }

    /// Extract the reply from an arbitrary JSON body.
    ///
    /// Any well-formed JSON counts as a reply, including `null` and
    /// non-object bodies; they simply carry no answer.
    #[must_use]
    pub fn from_json(body: &Value) -> Self {
        let response = body
            .get("response")
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_owned);
        Self { response }
    }
}

/// Something that can answer a query.
///
/// Implemented by [`QueryClient`] for the HTTP backend; tests substitute
/// in-process fakes.
#[async_trait]
pub trait QueryBackend: Send + Sync + std::fmt::Debug {
    /// Send `text` to the backend and return its reply.
    async fn query(&self, text: &str) -> Result<QueryReply, BackendError>;
}
