//! Settings API

use crate::{ClientResult, HttpClient};
use shared::models::{CommunicationSettings, CommunicationUpdate, SecurityUpdate};

/// `/settings/communication` and `/security/update` endpoints.
#[derive(Debug, Clone)]
pub struct SettingsApi {
    http: HttpClient,
}

impl SettingsApi {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Load saved communication preferences for one partner.
    pub async fn communication(&self, partner_id: &str) -> ClientResult<CommunicationSettings> {
        self.http
            .get(&format!("settings/communication?partnerId={partner_id}"))
            .await
    }

    /// Persist the full communication preference state.
    pub async fn save_communication(
        &self,
        update: &CommunicationUpdate,
    ) -> ClientResult<serde_json::Value> {
        self.http.post("settings/communication", update).await
    }

    /// Change the account password.
    pub async fn update_security(&self, update: &SecurityUpdate) -> ClientResult<()> {
        self.http.put_unit("security/update", update).await
    }
}
