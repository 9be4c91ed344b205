// ABOUTME: Client-side generation chain: credentials fetch, prompt, relay call, validation
// ABOUTME: Holds explicit current-selection state and an in-flight guard against repeated triggers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trail generation client
//!
//! Plays the role the browser script played: one user action triggers one
//! linear chain of awaits against the trailsmith server. The starting point is
//! explicit client state (no implicit globals), and an in-flight flag rejects
//! a second `generate` while one is pending instead of letting it race the
//! renderer.

use std::sync::atomic::{AtomicBool, Ordering};

use reqwest::Client;
use serde_json::Value;
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::external::CredentialPair;
use crate::trail::models::{coordinate_pair_from_input, TrailRequest};
use crate::trail::prompt::{chat_completion_body, ModelParams};
use crate::trail::validate::{validate_relay_response, TrailValidation};

/// Client driving the trail generation chain against a trailsmith server
pub struct TrailClient {
    server_base_url: String,
    http_client: Client,
    model_params: ModelParams,
    starting_point: Option<[f64; 2]>,
    in_flight: AtomicBool,
}

impl TrailClient {
    /// Create a client for the given server base URL
    #[must_use]
    pub fn new(server_base_url: impl Into<String>) -> Self {
        Self {
            server_base_url: server_base_url.into(),
            http_client: Client::new(),
            model_params: ModelParams::default(),
            starting_point: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Override the model parameters sent with each generation
    #[must_use]
    pub fn with_model_params(mut self, model_params: ModelParams) -> Self {
        self.model_params = model_params;
        self
    }

    /// Record the selected starting point
    pub fn set_starting_point(&mut self, coordinates: [f64; 2]) {
        self.starting_point = Some(coordinates);
    }

    /// Record a starting point supplied as form-field text (`"lng,lat"`)
    ///
    /// # Errors
    /// Returns invalid-input when the text is not a numeric pair.
    pub fn select_starting_point(&mut self, text: &str) -> AppResult<()> {
        let coordinates = coordinate_pair_from_input(text)?;
        info!("starting point selected: {coordinates:?}");
        self.starting_point = Some(coordinates);
        Ok(())
    }

    /// Currently selected starting point, if any
    #[must_use]
    pub const fn starting_point(&self) -> Option<[f64; 2]> {
        self.starting_point
    }

    /// Fetch the credential pair from the secrets gateway
    ///
    /// # Errors
    /// Returns an external-service error when the gateway is unreachable or
    /// answers with a non-success status.
    pub async fn fetch_credentials(&self) -> AppResult<CredentialPair> {
        let url = format!("{}/secrets-config", self.server_base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::external_service("secrets gateway", e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::external_service(
                "secrets gateway",
                format!("credential fetch failed with HTTP {status}"),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::external_service("secrets gateway", format!("JSON parse error: {e}")))
    }

    /// Run one generation chain: prompt, relay call, validation
    ///
    /// The outcome distinguishes chain failures (`Err`, nothing reached the
    /// model) from rejected model output (`Ok(Invalid(..))`, which still gets
    /// rendered as a failure notice).
    ///
    /// # Errors
    /// Returns invalid-input when no starting point is selected or another
    /// generation is still in flight, and an external-service error when the
    /// relay cannot be reached.
    pub async fn generate(
        &self,
        mode: &str,
        duration: &str,
        difficulty: &str,
    ) -> AppResult<TrailValidation> {
        let Some(coordinates) = self.starting_point else {
            return Err(AppError::invalid_input(
                "please select a starting point before generating",
            ));
        };

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(AppError::invalid_input(
                "a trail generation is already in flight",
            ));
        }

        let result = self
            .generate_inner(coordinates, mode, duration, difficulty)
            .await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn generate_inner(
        &self,
        coordinates: [f64; 2],
        mode: &str,
        duration: &str,
        difficulty: &str,
    ) -> AppResult<TrailValidation> {
        let request = TrailRequest {
            coordinates,
            mode: mode.to_owned(),
            duration: duration.to_owned(),
            difficulty: difficulty.to_owned(),
        };
        let body = chat_completion_body(&request, &self.model_params);

        info!("requesting trail generation via relay");
        let url = format!("{}/chat-relay", self.server_base_url.trim_end_matches('/'));
        let response = self
            .http_client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service("chat relay", e.to_string()))?;

        let status = response.status().as_u16();
        let body: Value = response.json().await.unwrap_or(Value::Null);

        Ok(validate_relay_response(status, &body))
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[tokio::test]
    async fn generate_without_starting_point_aborts_before_any_network_call() {
        // Deliberately unroutable URL: the guard must fire first.
        let client = TrailClient::new("http://127.0.0.1:1");
        let err = client.generate("walking", "1 hour", "easy").await.unwrap_err();
        assert!(err.to_string().contains("starting point"));
    }

    #[test]
    fn select_starting_point_parses_form_text() {
        let mut client = TrailClient::new("http://127.0.0.1:1");
        client.select_starting_point("153.02,-27.47").unwrap();
        assert_eq!(client.starting_point(), Some([153.02, -27.47]));
    }

    #[test]
    fn select_starting_point_rejects_malformed_text() {
        let mut client = TrailClient::new("http://127.0.0.1:1");
        assert!(client.select_starting_point("somewhere nice").is_err());
        assert_eq!(client.starting_point(), None);
    }
}
