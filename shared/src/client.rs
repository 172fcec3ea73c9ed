//! Auth request/response types shared between backend and client

use serde::{Deserialize, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub token: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Registration response. The backend is loose about where it puts the
/// new identifier, so all three spellings are accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default, rename = "partnerId")]
    pub partner_id: Option<String>,
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
}

impl RegisterResponse {
    /// First identifier present, in `partnerId`/`userId`/`_id` order.
    pub fn resolved_partner_id(&self) -> Option<&str> {
        self.partner_id
            .as_deref()
            .or(self.user_id.as_deref())
            .or(self.id.as_deref())
    }
}

/// Error body shape used by the backend: `{"message": "..."}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_decodes_underscore_id() {
        let r: LoginResponse =
            serde_json::from_str(r#"{"_id":"partner-1","token":"t"}"#).unwrap();
        assert_eq!(r.id, "partner-1");
        assert_eq!(r.token, "t");
    }

    #[test]
    fn register_identifier_precedence() {
        let r: RegisterResponse =
            serde_json::from_str(r#"{"userId":"u1","_id":"raw"}"#).unwrap();
        assert_eq!(r.resolved_partner_id(), Some("u1"));

        let r: RegisterResponse = serde_json::from_str(r#"{"_id":"raw"}"#).unwrap();
        assert_eq!(r.resolved_partner_id(), Some("raw"));

        let r: RegisterResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(r.resolved_partner_id(), None);
    }
}
