// ABOUTME: External API client module organization
// ABOUTME: Holds HTTP clients for services the server depends on but does not own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! External API clients

/// Secrets store client (key-value credential lookups)
pub mod secrets_store;

pub use secrets_store::{CredentialPair, SecretsStoreClient, SecretsStoreConfig};
