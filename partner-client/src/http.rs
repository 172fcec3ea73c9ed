//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for making requests against one configured base URL.
/// One attempt per call; no retry, no backoff.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a client against the primary base URL.
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_base(config, config.base_url.clone())
    }

    /// Create a client against the remote base URL.
    pub fn remote(config: &ClientConfig) -> Self {
        Self::with_base(config, config.remote_base_url.clone())
    }

    fn with_base(config: &ClientConfig, base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url,
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    fn authorized(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }
        request
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.authorized(self.client.get(self.url(path)));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.authorized(self.client.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body, discarding any response body
    pub async fn put_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> ClientResult<()> {
        let request = self.authorized(self.client.put(self.url(path)).json(body));
        let response = request.send().await?;
        Self::handle_unit_response(response).await
    }

    /// Make a DELETE request, discarding any response body
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let request = self.authorized(self.client.delete(self.url(path)));
        let response = request.send().await?;
        Self::handle_unit_response(response).await
    }

    /// POST a multipart form, discarding any response body
    pub async fn post_multipart_unit(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<()> {
        let request = self.authorized(self.client.post(self.url(path)).multipart(form));
        let response = request.send().await?;
        Self::handle_unit_response(response).await
    }

    /// Handle the HTTP response, decoding a JSON body
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        response.json().await.map_err(Into::into)
    }

    /// Handle an HTTP response whose body we do not care about
    async fn handle_unit_response(response: reqwest::Response) -> ClientResult<()> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        Ok(())
    }
}
