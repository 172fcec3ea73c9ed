//! Auth API

use crate::{ClientConfig, ClientResult, HttpClient};
use shared::client::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// `/auth/*` endpoints. Login goes to the primary base; registration to
/// the remote base, matching the deployed backend split.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: HttpClient,
    remote_http: HttpClient,
}

impl AuthApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: config.build_http_client(),
            remote_http: config.build_remote_http_client(),
        }
    }

    /// Authenticate; returns the partner id and token to persist.
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        self.http.post("auth/login", request).await
    }

    /// Create a new partner account.
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse> {
        self.remote_http.post("auth/register", request).await
    }
}
