//! Profile view + form view model

use crate::api::ProfileApi;
use crate::controller::list::LoadState;
use crate::error::{ClientError, ClientResult};
use crate::session::{partner_id_from_token, SessionStorage};
use shared::models::{ProfileSubmission, RestaurantProfile};

pub struct ProfileController {
    api: ProfileApi,
    storage: SessionStorage,
    profile: Option<RestaurantProfile>,
    state: LoadState,
    error: Option<String>,
}

impl ProfileController {
    pub fn new(api: ProfileApi, storage: SessionStorage) -> Self {
        Self {
            api,
            storage,
            profile: None,
            state: LoadState::Idle,
            error: None,
        }
    }

    /// Load the profile. Needs a persisted token; the partner id comes
    /// from the token payload. No fallback dataset on this page - a
    /// failure just surfaces its message.
    pub async fn load(&mut self) {
        self.state = LoadState::Loading;
        match self.try_load().await {
            Ok(profile) => {
                self.profile = Some(profile);
                self.error = None;
                self.state = LoadState::Loaded;
            }
            Err(err) => {
                tracing::error!(error = %err, "profile fetch failed");
                self.error = Some(err.user_message(&err.to_string()));
                self.state = LoadState::Errored;
            }
        }
    }

    async fn try_load(&self) -> ClientResult<RestaurantProfile> {
        let session = self.storage.load().unwrap_or_default();
        let token = session.token.ok_or(ClientError::MissingIdentity)?;
        let partner_id = partner_id_from_token(&token).ok_or(ClientError::MissingIdentity)?;
        self.api.fetch(&partner_id, &token).await
    }

    /// Submit the profile form once, all-or-nothing. Aborts before any
    /// request when no partner id is persisted.
    pub async fn submit(&self, submission: &ProfileSubmission) -> ClientResult<()> {
        let session = self.storage.load().unwrap_or_default();
        let partner_id = session.partner_id.ok_or(ClientError::MissingIdentity)?;
        self.api
            .save(&partner_id, submission)
            .await
            .map_err(|err| {
                tracing::error!(error = %err, "profile save failed");
                err
            })
    }

    pub fn profile(&self) -> Option<&RestaurantProfile> {
        self.profile.as_ref()
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use tempfile::TempDir;

    #[tokio::test]
    async fn submit_without_identity_aborts_before_any_request() {
        let temp_dir = TempDir::new().unwrap();
        let config = ClientConfig::new("http://127.0.0.1:9")
            .with_remote_base_url("http://127.0.0.1:9")
            .with_timeout(1);
        let controller = ProfileController::new(
            ProfileApi::new(config.build_remote_http_client()),
            SessionStorage::new(temp_dir.path(), "session.json"),
        );

        let err = controller
            .submit(&ProfileSubmission::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::MissingIdentity));
    }

    #[tokio::test]
    async fn load_without_token_errors_with_identity_message() {
        let temp_dir = TempDir::new().unwrap();
        let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
        let mut controller = ProfileController::new(
            ProfileApi::new(config.build_remote_http_client()),
            SessionStorage::new(temp_dir.path(), "session.json"),
        );

        controller.load().await;
        assert_eq!(controller.state(), LoadState::Errored);
        assert!(controller.profile().is_none());
        assert!(controller.error().is_some());
    }
}
