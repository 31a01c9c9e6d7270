//! Identity provider client.
//!
//! Signing in against the platform yields a stable user id and a bearer
//! token; both are cached in the application data directory so subsequent
//! commands can act as the signed-in user without re-prompting. The cache
//! file is the single source of "who is signed in" for the whole tool.

use crate::libs::config::ServerConfig;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fs;

const IDENTITY_FILE: &str = ".identity";
const LOGIN_URL: &str = "auth/login";

#[derive(Serialize)]
struct LoginCredentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// The signed-in identity, as returned by the provider and cached locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub token: String,
}

pub struct Auth {
    client: Client,
    api_url: String,
}

impl Auth {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Authenticates against the platform and returns the session identity.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let res = self
            .client
            .post(format!("{}/{}", self.api_url, LOGIN_URL))
            .json(&LoginCredentials { email, password })
            .send()
            .await?;
        Ok(res.error_for_status()?.json().await?)
    }
}

/// Returns the cached signed-in identity, if any.
pub fn current_session() -> Result<Option<AuthSession>> {
    let path = DataStorage::new().get_path(IDENTITY_FILE)?;
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents).ok())
}

/// Caches the identity for subsequent commands.
pub fn store_session(session: &AuthSession) -> Result<()> {
    let path = DataStorage::new().get_path(IDENTITY_FILE)?;
    fs::write(path, serde_json::to_string(session)?)?;
    Ok(())
}

/// Forgets the cached identity. A missing file is not an error.
pub fn clear_session() -> Result<()> {
    let path = DataStorage::new().get_path(IDENTITY_FILE)?;
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
