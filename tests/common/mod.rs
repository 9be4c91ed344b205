// ABOUTME: Shared helpers for integration tests
// ABOUTME: Spawns the app and stub store/upstream servers on ephemeral ports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use trailsmith::config::ServerConfig;
use trailsmith::resources::ServerResources;
use trailsmith::routes;

/// Bind a router on an ephemeral port and serve it in the background
pub async fn spawn(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

#[derive(Clone)]
struct StoreState(Arc<HashMap<String, String>>);

async fn secrets_lookup(
    State(state): State<StoreState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    let name = params
        .get("name")
        .and_then(|filter| filter.strip_prefix("eq."))
        .unwrap_or_default();

    state.0.get(name).map_or_else(
        || Json(json!([])),
        |value| Json(json!([{ "value": value }])),
    )
}

/// Stub secrets store serving the given name/value rows
pub fn stub_store(rows: &[(&str, &str)]) -> Router {
    let rows: HashMap<String, String> = rows
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect();

    Router::new()
        .route("/rest/v1/secrets", get(secrets_lookup))
        .with_state(StoreState(Arc::new(rows)))
}

/// Stub store with both credential rows present
pub fn stub_store_with_defaults() -> Router {
    stub_store(&[
        ("openai_api_key", "sk-test"),
        ("mapbox_access_token", "pk.test"),
    ])
}

/// Build server resources pointing at stub store and upstream addresses
pub fn test_resources(store_addr: SocketAddr, upstream_addr: SocketAddr) -> Arc<ServerResources> {
    let config = ServerConfig {
        http_port: 0,
        secrets_store_url: format!("http://{store_addr}"),
        secrets_store_key: "service-key".to_owned(),
        openai_base_url: format!("http://{upstream_addr}"),
    };
    Arc::new(ServerResources::new(config))
}

/// Spawn a full trailsmith app wired to the given stub addresses
pub async fn spawn_app(store_addr: SocketAddr, upstream_addr: SocketAddr) -> SocketAddr {
    spawn(routes::router(test_resources(store_addr, upstream_addr))).await
}

/// A chat-completion envelope whose first choice carries the given content
pub fn completion_envelope(content: &str) -> Value {
    json!({ "choices": [ { "message": { "content": content } } ] })
}

/// Model content for the Riverwalk sample trail
pub fn riverwalk_content() -> String {
    json!({
        "name": "Riverwalk",
        "theme": "nature",
        "mode": "walking",
        "distance": "3km",
        "difficulty": "easy",
        "description": "A scenic walk.",
        "waypoints": [ { "name": "Start", "coordinates": "153.02,-27.47" } ]
    })
    .to_string()
}

/// An address nothing listens on (bound then immediately released)
pub async fn unreachable_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}
