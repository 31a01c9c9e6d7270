//! Generic client for the platform's document store API.
//!
//! Documents live in named collections and are addressed by id. The store
//! offers plain reads, merge writes that do not require fetching the full
//! document first, and server-side numeric increments. There are no
//! transactional guarantees across documents; writers rely on last-writer-wins
//! for whole fields and on atomic increments for counters.

use crate::libs::config::ServerConfig;
use anyhow::Result;
use reqwest::{header::AUTHORIZATION, Client, StatusCode};
use serde_json::Value;

/// Live session records, one document per user id.
pub const SESSIONS_COLLECTION: &str = "user-sessions";
/// Daily study-time aggregates, one document per `<user id>_<date>`.
pub const LEARNING_TIME_COLLECTION: &str = "learning-time";

#[derive(Clone)]
pub struct DocStore {
    client: Client,
    api_url: String,
    token: String,
}

impl DocStore {
    pub fn new(config: &ServerConfig, token: &str) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    fn url(&self, collection: &str, id: &str) -> String {
        format!("{}/store/{}/{}", self.api_url, collection, id)
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Fetches a document; a 404 means the document does not exist.
    pub async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let res = self
            .client
            .get(self.url(collection, id))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await?;

        match res.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(res.json().await?)),
            status => anyhow::bail!("document store returned {}", status),
        }
    }

    /// Merges the given fields into a document, creating it if absent.
    pub async fn merge(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        let res = self
            .client
            .patch(self.url(collection, id))
            .header(AUTHORIZATION, self.bearer())
            .json(fields)
            .send()
            .await?;
        res.error_for_status()?;
        Ok(())
    }

    /// Applies server-side numeric increments to the named fields, creating
    /// the document if absent. Field paths may be dotted
    /// (e.g. `byHour.14`).
    pub async fn increment(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        let res = self
            .client
            .post(format!("{}/increment", self.url(collection, id)))
            .header(AUTHORIZATION, self.bearer())
            .json(fields)
            .send()
            .await?;
        res.error_for_status()?;
        Ok(())
    }

    /// Lists documents in a collection filtered by query parameters.
    pub async fn query(&self, collection: &str, params: &[(&str, String)]) -> Result<Vec<Value>> {
        let res = self
            .client
            .get(format!("{}/store/{}", self.api_url, collection))
            .header(AUTHORIZATION, self.bearer())
            .query(params)
            .send()
            .await?;
        Ok(res.error_for_status()?.json().await?)
    }
}
