//! HTTP transport layer for the Grapevine SDK.

use crate::config::ClientConfig;
use crate::error::{StaffbaseError, StaffbaseResult};
use bytes::Bytes;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> StaffbaseResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut auth = header::HeaderValue::from_str(&format!("Basic {}", config.api_key))
            .map_err(|_| StaffbaseError::Config("Invalid API key format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, auth);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL for the given path.
    fn build_url(&self, path: &str) -> StaffbaseResult<url::Url> {
        self.config.endpoint(path)
    }

    /// Send a request once and turn non-2xx statuses into errors.
    async fn execute(&self, request_builder: RequestBuilder) -> StaffbaseResult<Response> {
        let response = request_builder.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = status.as_u16(), "Staffbase request failed");
        Err(StaffbaseError::from_response(status.as_u16(), &body))
    }

    /// Execute a GET request.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> StaffbaseResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request");

        let response = self.execute(self.client.get(url)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a GET request with query parameters.
    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> StaffbaseResult<T> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request with query");

        let response = self.execute(self.client.get(url).query(query)).await?;
        let body = response.json().await?;
        Ok(body)
    }

    /// Execute a GET request and return the raw body.
    pub async fn get_bytes(&self, path: &str) -> StaffbaseResult<Bytes> {
        let url = self.build_url(path)?;
        debug!(url = %url, "GET request (raw)");

        let response = self.execute(self.client.get(url)).await?;
        Ok(response.bytes().await?)
    }
}
