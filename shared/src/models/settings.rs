//! Settings models (communication preferences, security)

use serde::{Deserialize, Serialize};

/// Notification category within a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Promotions,
    Bookings,
    System,
}

/// Per-channel boolean toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelToggles {
    #[serde(default)]
    pub promotions: bool,
    #[serde(default)]
    pub bookings: bool,
    #[serde(default)]
    pub system: bool,
}

impl ChannelToggles {
    pub fn toggle(&mut self, channel: Channel) {
        match channel {
            Channel::Promotions => self.promotions = !self.promotions,
            Channel::Bookings => self.bookings = !self.bookings,
            Channel::System => self.system = !self.system,
        }
    }
}

/// Communication preferences as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationSettings {
    #[serde(default)]
    pub email_settings: ChannelToggles,
    #[serde(default)]
    pub sms_settings: ChannelToggles,
    #[serde(default)]
    pub push_notifications: bool,
}

/// Full-state save payload; no diffing, no partial save.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunicationUpdate {
    pub partner_id: String,
    #[serde(flatten)]
    pub settings: CommunicationSettings,
}

/// Password-change payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityUpdate {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
    pub partner_id: String,
}
