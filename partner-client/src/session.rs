//! Durable client-side session
//!
//! Persists the partner id and auth token between runs as a JSON file,
//! standing in for the browser's localStorage.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Persisted identity: the `partnerId` and `token` keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub partner_id: Option<String>,
    pub token: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store both keys after a successful login.
    pub fn set_login(&mut self, partner_id: String, token: String) {
        self.partner_id = Some(partner_id);
        self.token = Some(token);
    }

    /// Drop both keys on logout.
    pub fn clear(&mut self) {
        self.partner_id = None;
        self.token = None;
    }

    pub fn partner_id(&self) -> Option<&str> {
        self.partner_id.as_deref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// File-backed session storage.
#[derive(Debug, Clone)]
pub struct SessionStorage {
    path: PathBuf,
}

impl SessionStorage {
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn save(&self, session: &Session) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json)
    }

    pub fn load(&self) -> Option<Session> {
        if !self.path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&json).ok()
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn delete(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    #[serde(default)]
    id: Option<String>,
}

/// Extract the partner id from a JWT payload without verifying the
/// signature. The result is unauthenticated and is only suitable for UI
/// personalization, never for authorization decisions.
pub fn partner_id_from_token(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let claims: TokenClaims = serde_json::from_slice(&bytes).ok()?;
    claims.id
}
