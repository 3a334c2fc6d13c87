use anyhow::{anyhow, Context, Result};
use dioxus::logger::tracing::{debug, error};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::config;
use crate::shared::types::User;

static CLIENT: Lazy<ApiClient> = Lazy::new(|| ApiClient::new(config::base_url()));

/// Thin client for the leaderboard backend.
///
/// Every call is a single attempt. Failures are logged and turned into an
/// empty result so the screen never has to handle an error.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub async fn fetch_leaderboard(&self, limit: usize) -> Vec<User> {
        match self
            .get_json("/leaderboard", &[("limit", limit.to_string())])
            .await
        {
            Ok(users) => users,
            Err(e) => {
                error!("[api] failed to fetch leaderboard: {e:#}");
                Vec::new()
            }
        }
    }

    pub async fn search_users(&self, query: &str) -> Vec<User> {
        if query.is_empty() {
            return Vec::new();
        }
        match self.get_json("/search", &[("q", query.to_string())]).await {
            Ok(users) => users,
            Err(e) => {
                error!("[api] failed to search users for {query:?}: {e:#}");
                Vec::new()
            }
        }
    }

    pub async fn simulate_traffic(&self) -> Value {
        match self.get_json::<Value>("/simulate", &[]).await {
            Ok(body) => {
                debug!("[api] simulate response: {body}");
                body
            }
            Err(e) => {
                error!("[api] failed to simulate traffic: {e:#}");
                simulate_error()
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[api] GET {} {:?}", url, query);
        let res = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("sending GET {}", url))?;
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow!(
                "GET {} failed with status {}: {}",
                url,
                status,
                snippet(&text)
            ));
        }
        // Read body once to allow better error messages when JSON decoding fails
        let bytes = res
            .bytes()
            .await
            .with_context(|| format!("reading body from GET {}", url))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            anyhow!(
                "decoding JSON from GET {} failed: {}\nBody snippet: {}",
                url,
                e,
                snippet(&String::from_utf8_lossy(&bytes))
            )
        })
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(300).collect()
}

/// Placeholder returned by `simulate_traffic` when the backend call fails.
pub fn simulate_error() -> Value {
    json!({ "message": "Error simulating traffic" })
}

/// Process-wide client bound to the configured backend.
pub fn client() -> &'static ApiClient {
    &CLIENT
}
