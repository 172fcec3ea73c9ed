//! Login and registration view model

use crate::api::AuthApi;
use crate::error::{ClientError, ClientResult};
use crate::session::{Session, SessionStorage};
use shared::client::{LoginRequest, RegisterRequest};

pub struct AuthController {
    api: AuthApi,
    storage: SessionStorage,
}

impl AuthController {
    pub fn new(api: AuthApi, storage: SessionStorage) -> Self {
        Self { api, storage }
    }

    /// Authenticate and persist the returned identity. A server-side
    /// rejection surfaces the backend's message; transport failures keep
    /// their own error.
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<Session> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.api.login(&request).await.map_err(|err| {
            tracing::error!(error = %err, "login failed");
            match err.server_message() {
                Some(message) => ClientError::Validation(message),
                None => err,
            }
        })?;

        let mut session = Session::new();
        session.set_login(response.id, response.token);
        self.storage.save(&session)?;
        Ok(session)
    }

    /// Register a new account. Local checks run first; a missing field
    /// or password mismatch returns a validation error without issuing
    /// any request. Token/identifier are persisted when present.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> ClientResult<Session> {
        if email.is_empty() || password.is_empty() || confirm_password.is_empty() {
            return Err(ClientError::Validation(
                "All fields are required.".to_string(),
            ));
        }
        if password != confirm_password {
            return Err(ClientError::Validation(
                "Passwords do not match.".to_string(),
            ));
        }

        let request = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self.api.register(&request).await.map_err(|err| {
            tracing::error!(error = %err, "registration failed");
            match err.server_message() {
                Some(message) => ClientError::Validation(message),
                None => err,
            }
        })?;

        let mut session = self.storage.load().unwrap_or_default();
        if let Some(token) = response.token.clone() {
            session.token = Some(token);
        }
        if let Some(partner_id) = response.resolved_partner_id() {
            session.partner_id = Some(partner_id.to_string());
        }
        self.storage.save(&session)?;
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn register_mismatch_fails_locally() {
        let temp_dir = TempDir::new().unwrap();
        // Closed port: any network attempt would error differently than
        // the validation path asserted here.
        let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
        let controller = AuthController::new(
            AuthApi::new(&config),
            SessionStorage::new(temp_dir.path(), "session.json"),
        );

        let err = controller
            .register("a@b.c", "secret", "different")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Validation(_)));
        assert_eq!(err.to_string(), "Passwords do not match.");

        let err = controller.register("", "secret", "secret").await.unwrap_err();
        assert_eq!(err.to_string(), "All fields are required.");
    }
}
