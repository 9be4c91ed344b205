// ABOUTME: Shared server state passed to every HTTP handler
// ABOUTME: Bundles configuration with the secrets store and upstream relay clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Shared server resources
//!
//! One `ServerResources` is built at startup and shared as `Arc` state across
//! all route handlers. Handlers hold no state of their own; invocations are
//! independent and there is no cross-request mutable state.

use crate::config::ServerConfig;
use crate::external::{SecretsStoreClient, SecretsStoreConfig};
use crate::llm::ChatRelayClient;

/// Everything the HTTP handlers need
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Secrets store client
    pub secrets: SecretsStoreClient,
    /// Upstream chat-completion relay client
    pub relay: ChatRelayClient,
}

impl ServerResources {
    /// Build resources from configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let secrets = SecretsStoreClient::new(SecretsStoreConfig {
            base_url: config.secrets_store_url.clone(),
            service_key: config.secrets_store_key.clone(),
        });
        let relay = ChatRelayClient::new(config.openai_base_url.clone());

        Self {
            config,
            secrets,
            relay,
        }
    }
}
