// ABOUTME: Route module organization for trailsmith HTTP endpoints
// ABOUTME: Per-domain route units merged into one app router with CORS and tracing layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Route modules
//!
//! Each domain module contains only route definitions and thin handler
//! functions. CORS is fully permissive, matching the original demo's
//! `Access-Control-Allow-Origin: *` contract on every endpoint.

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::resources::ServerResources;

/// Health check and system status routes
pub mod health;

/// Chat relay routes (opaque pass-through to the upstream model provider)
pub mod relay;

/// Secrets gateway routes (credential pair lookups)
pub mod secrets;

pub use health::HealthRoutes;
pub use relay::RelayRoutes;
pub use secrets::SecretsRoutes;

/// Build the full application router
#[must_use]
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::router())
        .merge(SecretsRoutes::router(resources.clone()))
        .merge(RelayRoutes::router(resources))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
