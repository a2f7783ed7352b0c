//! Configuration types for the Grapevine SDK.

use crate::error::{StaffbaseError, StaffbaseResult};
use std::time::Duration;
use url::Url;

/// Default request timeout applied to every call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the Staffbase client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Staffbase instance, without trailing slash.
    pub base_url: String,
    /// Pre-encoded Basic-auth credential (`id:secret` in base64).
    pub api_key: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration, validating the base URL.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> StaffbaseResult<Self> {
        let base_url = base_url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(StaffbaseError::Config("base_url is required".to_string()));
        }
        Url::parse(base_url)?;

        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(StaffbaseError::Config("api_key is required".to_string()));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Absolute URL for an endpoint path such as `/api/spaces`.
    pub fn endpoint(&self, path: &str) -> StaffbaseResult<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_defaults() {
        let config = ClientConfig::new("https://app.staffbase.com", "a2V5").unwrap();

        assert_eq!(config.base_url, "https://app.staffbase.com");
        assert_eq!(config.api_key, "a2V5");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("https://app.staffbase.com///", "a2V5").unwrap();
        assert_eq!(config.base_url, "https://app.staffbase.com");
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let config = ClientConfig::new("https://intranet.example.com/sb/", "a2V5").unwrap();
        let url = config.endpoint("/api/pages/42").unwrap();
        assert_eq!(url.as_str(), "https://intranet.example.com/sb/api/pages/42");
    }

    #[test]
    fn test_missing_values_rejected() {
        assert!(matches!(
            ClientConfig::new("", "a2V5"),
            Err(StaffbaseError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("https://app.staffbase.com", ""),
            Err(StaffbaseError::Config(_))
        ));
        assert!(matches!(
            ClientConfig::new("not a url", "a2V5"),
            Err(StaffbaseError::InvalidUrl(_))
        ));
    }
}
