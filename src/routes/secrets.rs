// ABOUTME: Secrets gateway route returning the credential pair from the external store
// ABOUTME: Two point lookups per request; any failure yields a single 500 with no partial pair
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Secrets gateway routes
//!
//! `GET /secrets-config` returns `{openAiApiKey, mapboxAccessToken}` on
//! success and `{"error": ...}` with HTTP 500 otherwise. Store credentials
//! come exclusively from server configuration; a caller can never supply its
//! own store key. Lookups are not retried.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, warn};

use crate::errors::AppResult;
use crate::external::CredentialPair;
use crate::resources::ServerResources;

/// Secrets gateway routes handler
pub struct SecretsRoutes;

impl SecretsRoutes {
    /// Create the secrets gateway routes
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/secrets-config", get(Self::secrets_config))
            .with_state(resources)
    }

    async fn secrets_config(
        State(resources): State<Arc<ServerResources>>,
    ) -> AppResult<Json<CredentialPair>> {
        let pair = resources.secrets.fetch_credentials().await.map_err(|err| {
            warn!("credential lookup failed: {err}");
            err
        })?;

        info!("credential pair served");
        Ok(Json(pair))
    }
}
