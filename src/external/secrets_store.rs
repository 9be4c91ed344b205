// ABOUTME: Secrets store client performing point lookups on the external credentials table
// ABOUTME: Fetches the OpenAI key and Mapbox token by fixed row name, never returning partial pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Secrets store client
//!
//! The store is an external key-value table named `secrets` with `name` and
//! `value` columns, exposed over a PostgREST-style HTTP API. The client issues
//! one point lookup per credential (`?name=eq.<key>&select=value`) and
//! requires exactly one row back. A failed or empty lookup aborts the whole
//! fetch - callers never see a partial credential pair. Lookups are not
//! retried and results are not cached.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// Store row name for the OpenAI API key
pub const OPENAI_KEY_NAME: &str = "openai_api_key";

/// Store row name for the Mapbox access token
pub const MAPBOX_TOKEN_NAME: &str = "mapbox_access_token";

/// Secrets store client configuration
#[derive(Debug, Clone)]
pub struct SecretsStoreConfig {
    /// Base URL of the store (e.g., `https://xyz.supabase.co`)
    pub base_url: String,
    /// Service role key used to authenticate lookups
    pub service_key: String,
}

/// Both third-party credentials, as served by the secrets gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Bearer key for the upstream chat-completion provider
    #[serde(rename = "openAiApiKey")]
    pub open_ai_api_key: String,
    /// Access token for the map widget
    #[serde(rename = "mapboxAccessToken")]
    pub mapbox_access_token: String,
}

/// One row of the `secrets` table, projected to its `value` column
#[derive(Debug, Deserialize)]
struct SecretRow {
    value: String,
}

/// Secrets store HTTP client
pub struct SecretsStoreClient {
    config: SecretsStoreConfig,
    http_client: Client,
}

impl SecretsStoreClient {
    /// Create a new store client
    #[must_use]
    pub fn new(config: SecretsStoreConfig) -> Self {
        Self {
            config,
            http_client: Client::new(),
        }
    }

    /// Fetch both credentials, in a fixed order
    ///
    /// # Errors
    /// Returns an error if either lookup fails or does not yield exactly one
    /// row; no partial pair is ever produced.
    pub async fn fetch_credentials(&self) -> AppResult<CredentialPair> {
        let open_ai_api_key = self.fetch_secret(OPENAI_KEY_NAME).await?;
        let mapbox_access_token = self.fetch_secret(MAPBOX_TOKEN_NAME).await?;

        Ok(CredentialPair {
            open_ai_api_key,
            mapbox_access_token,
        })
    }

    /// Fetch a single secret value by row name
    ///
    /// # Errors
    /// Returns an external-service error when the store is unreachable or
    /// rejects the request, and a configuration error when the row count is
    /// not exactly one.
    pub async fn fetch_secret(&self, name: &str) -> AppResult<String> {
        let url = format!("{}/rest/v1/secrets", self.config.base_url.trim_end_matches('/'));
        debug!("fetching secret '{name}' from store");

        let response = self
            .http_client
            .get(&url)
            .query(&[("name", format!("eq.{name}")), ("select", "value".to_owned())])
            .header("apikey", &self.config.service_key)
            .bearer_auth(&self.config.service_key)
            .send()
            .await
            .map_err(|e| AppError::external_service("secrets store", e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                "secrets store",
                format!("lookup for '{name}' failed with HTTP {status}"),
            ));
        }

        let mut rows: Vec<SecretRow> = response.json().await.map_err(|e| {
            AppError::external_service("secrets store", format!("JSON parse error: {e}"))
        })?;

        if rows.len() != 1 {
            return Err(AppError::config(format!(
                "expected exactly one row for secret '{name}', got {}",
                rows.len()
            )));
        }

        Ok(rows.remove(0).value)
    }
}
