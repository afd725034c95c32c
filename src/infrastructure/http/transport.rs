use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::HttpRequest;

/// Failure raised by an [`HttpTransport`].
#[derive(Debug, Clone, thiserror::Error)]
pub enum HttpError {
    #[error("HTTP request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("HTTP request could not be completed: {0}")]
    Network(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl HttpError {
    /// Status code of the response, when the server answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body)
            .map_err(|e| HttpError::Decode(format!("{} (status {})", e, self.status)))
    }
}

/// Performs request/response exchanges on behalf of the API clients.
///
/// Implementations must return [`HttpError::Status`] for every non-2xx
/// response so callers can branch on the status code. Timeouts and
/// connection handling belong to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError>;
}

/// Execute `request` and deserialize the JSON response body.
pub async fn get_json<T: DeserializeOwned>(
    transport: &dyn HttpTransport,
    request: &HttpRequest,
) -> Result<T, HttpError> {
    transport.execute(request).await?.json()
}

/// Production transport backed by `reqwest`.
pub struct ReqwestTransport {
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, HttpError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| HttpError::Network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let url = request.url();
        let mut builder = self.http_client.request(request.method.clone(), &url);

        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_string());
        }

        tracing::debug!(method = %request.method, url = %request.url_without_query(), "Sending request");

        // reqwest errors embed the full URL, query credentials included
        let response = builder
            .send()
            .await
            .map_err(|e| HttpError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            HttpError::Network(format!("Failed to read response body: {}", e.without_url()))
        })?;

        if !status.is_success() {
            return Err(HttpError::Status { status, body });
        }

        Ok(HttpResponse { status, body })
    }
}
