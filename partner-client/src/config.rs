//! Client configuration

/// Default local backend origin.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/prime-table-partner";

/// Default remote host used by the registration and profile endpoints.
pub const DEFAULT_REMOTE_BASE_URL: &str = "https://backend-partner-app.onrender.com";

/// Client configuration for connecting to the partner backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Primary base URL (reservations, dashboard, settings, login).
    pub base_url: String,

    /// Remote base URL (registration, profile fetch/save).
    pub remote_base_url: String,

    /// Bearer token for authenticated endpoints.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new configuration against the given primary base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            remote_base_url: DEFAULT_REMOTE_BASE_URL.to_string(),
            token: None,
            timeout: 30,
        }
    }

    /// Read both base URLs from the environment
    /// (`PRIME_TABLE_API_URL`, `PRIME_TABLE_REMOTE_API_URL`).
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PRIME_TABLE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let remote_base_url = std::env::var("PRIME_TABLE_REMOTE_API_URL")
            .unwrap_or_else(|_| DEFAULT_REMOTE_BASE_URL.to_string());
        Self {
            remote_base_url,
            ..Self::new(base_url)
        }
    }

    /// Set the remote base URL.
    pub fn with_remote_base_url(mut self, url: impl Into<String>) -> Self {
        self.remote_base_url = url.into();
        self
    }

    /// Set the bearer token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client against the primary base URL.
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }

    /// Create an HTTP client against the remote base URL.
    pub fn build_remote_http_client(&self) -> super::HttpClient {
        super::HttpClient::remote(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.remote_base_url, DEFAULT_REMOTE_BASE_URL);
        assert_eq!(config.timeout, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::new("http://127.0.0.1:9000")
            .with_remote_base_url("http://127.0.0.1:9001")
            .with_token("t")
            .with_timeout(5);
        assert_eq!(config.remote_base_url, "http://127.0.0.1:9001");
        assert_eq!(config.token.as_deref(), Some("t"));
        assert_eq!(config.timeout, 5);
    }
}
