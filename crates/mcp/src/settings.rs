// Process-wide settings, built once at startup and injected into the dispatcher

use crate::error::ToolError;
use grapevine_sdk::{StaffbaseClient, DEFAULT_TIMEOUT};
use std::fmt;
use std::time::Duration;

/// Staffbase connection settings.
///
/// Credentials may be absent; every tool call then fails with a
/// configuration error instead of the server refusing to start.
#[derive(Clone)]
pub struct Settings {
    pub staffbase_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    pub fn new(staffbase_url: Option<String>, api_key: Option<String>) -> Self {
        Self {
            staffbase_url,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve credentials; empty strings count as missing.
    pub fn credentials(&self) -> Result<Credentials, ToolError> {
        let base_url = non_empty(&self.staffbase_url);
        let api_key = non_empty(&self.api_key);

        match (base_url, api_key) {
            (Some(base_url), Some(api_key)) => Ok(Credentials {
                base_url: base_url.to_string(),
                api_key: api_key.to_string(),
            }),
            _ => Err(ToolError::missing_credentials()),
        }
    }

    /// Build a fresh client for one tool call.
    pub fn client(&self) -> Result<StaffbaseClient, ToolError> {
        let credentials = self.credentials()?;
        let client = StaffbaseClient::builder()
            .base_url(credentials.base_url)
            .api_key(credentials.api_key)
            .timeout(self.timeout)
            .build()?;
        Ok(client)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("staffbase_url", &self.staffbase_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Resolved Staffbase credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub base_url: String,
    pub api_key: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
