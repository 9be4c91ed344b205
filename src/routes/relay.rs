// ABOUTME: Chat relay route forwarding opaque completion requests to the upstream provider
// ABOUTME: Attaches the server-held bearer key; upstream status and body come back verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Chat relay routes
//!
//! `POST /chat-relay` forwards the caller's JSON body unmodified to the
//! upstream chat-completion endpoint. The bearer key is resolved server-side
//! from the secrets store per request - the caller never supplies it, which is
//! the whole point of the relay. Upstream rejections (quota, auth) are relayed
//! with their original status so the caller can tell causes apart; only
//! transport failures collapse to a generic 500.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::external::secrets_store::OPENAI_KEY_NAME;
use crate::resources::ServerResources;

/// Chat relay routes handler
pub struct RelayRoutes;

impl RelayRoutes {
    /// Create the chat relay routes
    #[must_use]
    pub fn router(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/chat-relay", post(Self::chat_relay))
            .with_state(resources)
    }

    async fn chat_relay(
        State(resources): State<Arc<ServerResources>>,
        Json(body): Json<Value>,
    ) -> Response {
        let api_key = match resources.secrets.fetch_secret(OPENAI_KEY_NAME).await {
            Ok(key) => key,
            Err(err) => {
                warn!("relay could not resolve upstream key: {err}");
                return err.into_response();
            }
        };

        match resources.relay.forward(&api_key, &body).await {
            Ok(relayed) => {
                if !relayed.status.is_success() {
                    warn!("upstream rejected relay request with HTTP {}", relayed.status);
                }
                (relayed.status, Json(relayed.body)).into_response()
            }
            Err(err) => {
                error!("relay transport failure: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
