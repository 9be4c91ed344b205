// ABOUTME: Liveness endpoint for deployment probes
// ABOUTME: Reports service name, version, and uptime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Health check routes

use std::time::Instant;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` when the process answers
    pub status: String,
    /// Service name
    pub service: String,
    /// Crate version
    pub version: String,
    /// Seconds since the router was built
    pub uptime_seconds: u64,
}

/// Health routes handler
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health routes
    #[must_use]
    pub fn router() -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .with_state(Instant::now())
    }

    async fn health(State(started_at): State<Instant>) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "ok".to_owned(),
            service: env!("CARGO_PKG_NAME").to_owned(),
            version: env!("CARGO_PKG_VERSION").to_owned(),
            uptime_seconds: started_at.elapsed().as_secs(),
        })
    }
}
