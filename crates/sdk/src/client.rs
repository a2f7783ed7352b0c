//! Main client for the Grapevine SDK.

use crate::api::*;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{StaffbaseError, StaffbaseResult};
use crate::transport::HttpTransport;
use std::sync::Arc;
use std::time::Duration;

/// Read-only client for the Staffbase REST API.
#[derive(Clone)]
pub struct StaffbaseClient {
    config: Arc<ClientConfig>,
    pub(crate) http: HttpTransport,
}

impl StaffbaseClient {
    /// Create a new client builder.
    pub fn builder() -> StaffbaseClientBuilder {
        StaffbaseClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> StaffbaseResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Get the spaces API.
    pub fn spaces(&self) -> SpacesApi<'_> {
        SpacesApi::new(self)
    }

    /// Get the posts API.
    pub fn posts(&self) -> PostsApi<'_> {
        PostsApi::new(self)
    }

    /// Get the pages API.
    pub fn pages(&self) -> PagesApi<'_> {
        PagesApi::new(self)
    }

    /// Get the search API.
    pub fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// Get the media API.
    pub fn media(&self) -> MediaApi<'_> {
        MediaApi::new(self)
    }
}

/// Builder for creating a StaffbaseClient.
pub struct StaffbaseClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl StaffbaseClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the Staffbase instance URL, e.g. `https://app.staffbase.com`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the base64-encoded Basic-auth token.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> StaffbaseResult<StaffbaseClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| StaffbaseError::Config("base_url is required".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| StaffbaseError::Config("api_key is required".to_string()))?;

        let mut config = ClientConfig::new(&base_url, api_key)?;
        config.timeout = self.timeout;

        StaffbaseClient::from_config(config)
    }
}

impl Default for StaffbaseClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
