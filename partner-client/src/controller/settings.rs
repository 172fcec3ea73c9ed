//! Settings view models (communication preferences, security)

use crate::api::SettingsApi;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStorage;
use shared::models::{Channel, CommunicationSettings, CommunicationUpdate, SecurityUpdate};

/// Communication preferences screen: load keyed by partner id, local
/// toggles, full-state save.
pub struct CommunicationController {
    api: SettingsApi,
    storage: SessionStorage,
    settings: CommunicationSettings,
    loading: bool,
}

impl CommunicationController {
    pub fn new(api: SettingsApi, storage: SessionStorage) -> Self {
        Self {
            api,
            storage,
            settings: CommunicationSettings::default(),
            loading: false,
        }
    }

    fn partner_id(&self) -> Option<String> {
        self.storage.load().and_then(|session| session.partner_id)
    }

    /// Load saved preferences. Skipped entirely when no partner id is
    /// persisted; a missing or failed read just keeps the defaults.
    pub async fn load(&mut self) {
        let Some(partner_id) = self.partner_id() else {
            tracing::warn!("no partner id in session, skipping settings load");
            return;
        };

        self.loading = true;
        match self.api.communication(&partner_id).await {
            Ok(settings) => self.settings = settings,
            Err(err) => {
                tracing::warn!(error = %err, "no saved communication settings found");
            }
        }
        self.loading = false;
    }

    pub fn toggle_email(&mut self, channel: Channel) {
        self.settings.email_settings.toggle(channel);
    }

    pub fn toggle_sms(&mut self, channel: Channel) {
        self.settings.sms_settings.toggle(channel);
    }

    pub fn set_push_notifications(&mut self, enabled: bool) {
        self.settings.push_notifications = enabled;
    }

    /// Persist the full current state; no diffing, no partial save.
    pub async fn save(&self) -> ClientResult<()> {
        let partner_id = self.partner_id().ok_or(ClientError::MissingIdentity)?;
        let update = CommunicationUpdate {
            partner_id,
            settings: self.settings.clone(),
        };

        let response = self.api.save_communication(&update).await.map_err(|err| {
            tracing::error!(error = %err, "saving communication settings failed");
            err
        })?;
        tracing::debug!(?response, "communication settings saved");
        Ok(())
    }

    pub fn settings(&self) -> &CommunicationSettings {
        &self.settings
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Password-change form input.
#[derive(Debug, Clone, Default)]
pub struct SecurityForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Security screen: local confirmation check, then a single PUT.
pub struct SecurityController {
    api: SettingsApi,
    storage: SessionStorage,
}

impl SecurityController {
    pub fn new(api: SettingsApi, storage: SessionStorage) -> Self {
        Self { api, storage }
    }

    /// Validate locally, then submit the password change. The server's
    /// message is surfaced on rejection.
    pub async fn submit(&self, form: &SecurityForm) -> ClientResult<()> {
        let partner_id = self
            .storage
            .load()
            .and_then(|session| session.partner_id)
            .ok_or(ClientError::MissingIdentity)?;

        if form.new_password != form.confirm_password {
            return Err(ClientError::Validation(
                "New password and confirm password do not match.".to_string(),
            ));
        }

        let update = SecurityUpdate {
            current_password: form.current_password.clone(),
            new_password: form.new_password.clone(),
            confirm_password: form.confirm_password.clone(),
            partner_id,
        };

        self.api.update_security(&update).await.map_err(|err| {
            tracing::error!(error = %err, "security update failed");
            match err.server_message() {
                Some(message) => ClientError::Validation(message),
                None => err,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use crate::ClientConfig;
    use tempfile::TempDir;

    fn offline_api() -> SettingsApi {
        let config = ClientConfig::new("http://127.0.0.1:9").with_timeout(1);
        SettingsApi::new(config.build_http_client())
    }

    #[tokio::test]
    async fn toggles_mutate_in_memory_state() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(temp_dir.path(), "session.json");
        let mut c = CommunicationController::new(offline_api(), storage);

        c.toggle_email(Channel::Promotions);
        c.toggle_sms(Channel::System);
        c.set_push_notifications(true);

        assert!(c.settings().email_settings.promotions);
        assert!(c.settings().sms_settings.system);
        assert!(c.settings().push_notifications);
    }

    #[tokio::test]
    async fn save_without_identity_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(temp_dir.path(), "session.json");
        let c = CommunicationController::new(offline_api(), storage);
        assert!(matches!(
            c.save().await.unwrap_err(),
            ClientError::MissingIdentity
        ));
    }

    #[tokio::test]
    async fn security_mismatch_fails_before_any_request() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(temp_dir.path(), "session.json");
        let mut session = Session::new();
        session.partner_id = Some("p1".to_string());
        storage.save(&session).unwrap();

        let c = SecurityController::new(offline_api(), storage);
        let err = c
            .submit(&SecurityForm {
                current_password: "old".to_string(),
                new_password: "new".to_string(),
                confirm_password: "other".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "New password and confirm password do not match."
        );
    }

    #[tokio::test]
    async fn load_skips_when_no_partner_id() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SessionStorage::new(temp_dir.path(), "session.json");
        let mut c = CommunicationController::new(offline_api(), storage);
        c.load().await;
        assert!(!c.is_loading());
        assert_eq!(*c.settings(), CommunicationSettings::default());
    }
}
