/*
[INPUT]:  HTTP configuration (base URL, timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::{Endpoint, Result, TaskdeskError};
use reqwest::{Client, Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Base URL used when none is configured
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Main HTTP client for the task backend.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct TaskdeskClient {
    http_client: Client,
    base_url: Url,
    timeout: Duration,
}

impl TaskdeskClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, DEFAULT_BASE_URL)
    }

    /// Create a new client against a specific backend origin
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            timeout: config.timeout,
        })
    }

    /// Backend origin all endpoint paths are joined onto
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Bind a request helper to a fixed endpoint path
    pub fn endpoint(&self, path: impl Into<String>) -> Endpoint<'_> {
        Endpoint::new(self, path)
    }

    fn url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    pub(crate) fn request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode a JSON body from a successful response
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = self.send_checked(builder).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Err(TaskdeskError::InvalidResponse("empty response body".to_string()));
        }
        serde_json::from_str(&body).map_err(|err| {
            debug!(error = %err, body_len = body.len(), "response body did not match schema");
            TaskdeskError::from(err)
        })
    }

    /// Send a request and discard the body of a successful response
    pub(crate) async fn send_discard(&self, builder: RequestBuilder) -> Result<()> {
        self.send_checked(builder).await?;
        Ok(())
    }

    async fn send_checked(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send().await.map_err(|err| self.map_transport(err))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(TaskdeskError::api_error(status, message))
    }

    fn map_transport(&self, err: reqwest::Error) -> TaskdeskError {
        if err.is_timeout() {
            TaskdeskError::Timeout {
                duration: self.timeout.as_secs(),
            }
        } else {
            TaskdeskError::Http(err)
        }
    }
}
