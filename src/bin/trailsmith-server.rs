// ABOUTME: Server binary hosting the secrets gateway and chat relay
// ABOUTME: Loads environment configuration, builds the router, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trailsmith server binary

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use trailsmith::config::ServerConfig;
use trailsmith::resources::ServerResources;
use trailsmith::routes;

#[tokio::main]
async fn main() -> Result<()> {
    trailsmith::logging::init();

    let config = ServerConfig::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let resources = Arc::new(ServerResources::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("trailsmith server listening on {addr}");

    axum::serve(listener, routes::router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}
