// ABOUTME: Chat-completion wire types and the upstream relay client
// ABOUTME: Forwards opaque caller bodies with a server-held bearer key, relaying upstream status verbatim
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Chat-completion wire types and relay client
//!
//! The relay is an opaque pass-through: it attaches the bearer credential the
//! caller never sees, forwards the caller's JSON body unmodified to
//! `{base}/chat/completions`, and hands back whatever status and body the
//! upstream produced. A non-success upstream status is NOT an error here - the
//! caller needs it verbatim to distinguish quota from auth from anything else.
//! Only transport failures (unreachable host, non-JSON answer) become errors.

use http::StatusCode;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::errors::{AppError, AppResult};

/// One role-tagged message in a chat-completion conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role (`user`, `assistant`, `system`)
    pub role: String,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Build a user-role message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_owned(),
            content: content.into(),
        }
    }
}

/// Requested response format for the completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Format type (`json_object` forces JSON output)
    #[serde(rename = "type")]
    pub format_type: String,
}

impl ResponseFormat {
    /// The `json_object` response format
    #[must_use]
    pub fn json_object() -> Self {
        Self {
            format_type: "json_object".to_owned(),
        }
    }
}

/// Chat-completion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier
    pub model: String,
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Completion token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Requested response format
    pub response_format: ResponseFormat,
}

/// Assistant message inside a completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantMessage {
    /// Generated text, absent for some finish reasons
    pub content: Option<String>,
}

/// One completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// The generated message
    pub message: AssistantMessage,
}

/// Chat-completion response envelope (the fields this system reads)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices; this system only ever reads the first
    pub choices: Vec<Choice>,
}

/// Upstream response as seen by the relay: status and JSON body, untouched
#[derive(Debug, Clone)]
pub struct RelayedResponse {
    /// Upstream HTTP status
    pub status: StatusCode,
    /// Upstream JSON body
    pub body: Value,
}

/// Client that forwards chat-completion requests to the upstream provider
pub struct ChatRelayClient {
    base_url: String,
    http_client: Client,
}

impl ChatRelayClient {
    /// Create a relay client for the given upstream base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http_client: Client::new(),
        }
    }

    /// Forward an opaque chat-completion body upstream
    ///
    /// The bearer key is attached server-side; the body is passed through
    /// unmodified. The upstream status and body come back verbatim.
    ///
    /// # Errors
    /// Returns an external-service error only for transport failures: the
    /// upstream could not be reached or answered with something that is not
    /// JSON.
    pub async fn forward(&self, api_key: &str, body: &Value) -> AppResult<RelayedResponse> {
        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!("forwarding chat-completion request upstream");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| AppError::external_service("chat completion endpoint", e.to_string()))?;

        let status = response.status();
        let body: Value = response.json().await.map_err(|e| {
            AppError::external_service("chat completion endpoint", format!("JSON parse error: {e}"))
        })?;

        Ok(RelayedResponse { status, body })
    }
}
