//! Review API client.
//!
//! [`ReviewApi`] builds the timestamped status query and maps transport
//! outcomes onto [`PollError`]. The HTTP call itself sits behind
//! [`HttpTransport`] so the loop can run against a scripted upstream.

use async_trait::async_trait;
use thiserror::Error;

use herald_common::error::{PollError, ShapeError};
use herald_common::types::PollCursor;

/// An outbound GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
}

/// Status code and raw body of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// The call did not complete: refused, timed out, unresolvable, or rejected
/// by the client before leaving the process.
#[derive(Debug, Error)]
#[error("network failure: {0}")]
pub struct TransportFailure(pub String);

/// Black-box capability: issue a GET and return status and body.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, TransportFailure> {
        let mut builder = self.client.get(&request.url).query(&request.query);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportFailure(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportFailure(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Client for the homework status endpoint.
pub struct ReviewApi<T> {
    transport: T,
    endpoint: String,
    token: String,
}

impl<T: HttpTransport> ReviewApi<T> {
    pub fn new(transport: T, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Request for submissions updated since `cursor`.
    pub fn build_request(&self, cursor: PollCursor) -> HttpRequest {
        HttpRequest {
            url: self.endpoint.clone(),
            headers: vec![(
                "Authorization".to_string(),
                format!("OAuth {}", self.token),
            )],
            query: vec![("from_date".to_string(), cursor.timestamp().to_string())],
        }
    }

    /// Fetch the raw status payload. The body is returned unvalidated.
    pub async fn fetch(&self, cursor: PollCursor) -> Result<serde_json::Value, PollError> {
        let request = self.build_request(cursor);

        let response = self
            .transport
            .get(&request)
            .await
            .map_err(|TransportFailure(cause)| {
                tracing::error!(error = %cause, "Review API request failed");
                PollError::Transport { cause }
            })?;

        if response.status != 200 {
            tracing::error!(status = response.status, "Review API endpoint is not OK");
            return Err(PollError::UpstreamStatus {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body)
            .map_err(|e| PollError::Shape(ShapeError::InvalidJson(e.to_string())))
    }
}
