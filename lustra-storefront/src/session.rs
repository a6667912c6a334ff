//! Session persistence
//!
//! Keeps the bearer token and the display username across restarts. The
//! token is only consumed here, never issued: its expiry is read out of
//! the JWT payload, and an expired token is purged on load so the rest of
//! the storefront can treat "token present" as "worth sending".

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionData {
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
}

/// Persisted session state: bearer token and username
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
    data: SessionData,
}

impl SessionStore {
    /// Load the session from `<dir>/session.json`, purging an expired
    /// token. Missing or malformed files yield a logged-out session.
    pub fn load(dir: &Path) -> Self {
        let path = dir.join("session.json");
        let mut data = if path.exists() {
            fs::read_to_string(&path)
                .ok()
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_default()
        } else {
            SessionData::default()
        };

        if let Some(token) = &data.token {
            if token_expired(token) {
                tracing::info!("Stored token expired, purging");
                data.token = None;
                let mut store = Self { path, data };
                if let Err(e) = store.save() {
                    tracing::warn!(error = %e, "Failed to persist token purge");
                }
                return store;
            }
        }

        Self { path, data }
    }

    fn save(&mut self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, json)
    }

    pub fn token(&self) -> Option<&str> {
        self.data.token.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.data.username.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.data.token.is_some()
    }

    /// Record a successful login.
    pub fn store_login(
        &mut self,
        token: impl Into<String>,
        username: impl Into<String>,
    ) -> io::Result<()> {
        self.data.token = Some(token.into());
        self.data.username = Some(username.into());
        self.save()?;
        tracing::debug!(username = %self.data.username.as_deref().unwrap_or_default(), "Session stored");
        Ok(())
    }

    /// Drop the token but keep the username, for the re-authentication
    /// prompt after the server rejected the credentials.
    pub fn clear_token(&mut self) -> io::Result<()> {
        self.data.token = None;
        self.save()
    }

    /// Full logout: token and username both gone.
    pub fn clear(&mut self) -> io::Result<()> {
        self.data = SessionData::default();
        self.save()
    }
}

/// Extract the `exp` claim (Unix timestamp) from a JWT without verifying
/// it. Verification belongs to the server; this only schedules purges.
pub fn parse_jwt_exp(token: &str) -> Option<u64> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return None;
    }

    let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;
    payload.get("exp")?.as_u64()
}

fn token_expired(token: &str) -> bool {
    let Some(exp) = parse_jwt_exp(token) else {
        // Opaque tokens carry no expiry; let the server decide.
        return false;
    };
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    now > exp
}
