// ABOUTME: Environment-only server configuration for the trailsmith server binary
// ABOUTME: Reads HTTP port, secrets store location/key, and the upstream chat endpoint base URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Server configuration
//!
//! Configuration is environment-only; there is no config file. Store
//! credentials always come from the server's own environment, never from a
//! caller - the gateway exists precisely so the client never holds them.

use std::env;

use crate::errors::{AppError, AppResult};

/// Default HTTP port for the server
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default upstream chat-completion base URL
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server binds to (`HTTP_PORT`, default 8081)
    pub http_port: u16,
    /// Base URL of the secrets store (`SECRETS_STORE_URL`, required)
    pub secrets_store_url: String,
    /// Service key for the secrets store (`SECRETS_STORE_KEY`, required)
    pub secrets_store_key: String,
    /// Base URL of the upstream chat-completion provider
    /// (`OPENAI_BASE_URL`, default `https://api.openai.com/v1`)
    pub openai_base_url: String,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    /// Returns a configuration error when a required variable is absent or a
    /// numeric variable does not parse.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            http_port: optional_parsed("HTTP_PORT", DEFAULT_HTTP_PORT)?,
            secrets_store_url: required("SECRETS_STORE_URL")?,
            secrets_store_key: required("SECRETS_STORE_KEY")?,
            openai_base_url: optional("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
        })
    }
}

fn required(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::config(format!("{name} environment variable is required")))
}

fn optional(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_owned())
}

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::config(format!("{name} must be a valid number, got '{raw}'"))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "HTTP_PORT",
            "SECRETS_STORE_URL",
            "SECRETS_STORE_KEY",
            "OPENAI_BASE_URL",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn from_env_requires_store_credentials() {
        clear_env();
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("SECRETS_STORE_URL"));
    }

    #[test]
    #[serial]
    fn from_env_applies_defaults() {
        clear_env();
        env::set_var("SECRETS_STORE_URL", "http://store.local");
        env::set_var("SECRETS_STORE_KEY", "service-key");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, DEFAULT_HTTP_PORT);
        assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn from_env_rejects_non_numeric_port() {
        clear_env();
        env::set_var("SECRETS_STORE_URL", "http://store.local");
        env::set_var("SECRETS_STORE_KEY", "service-key");
        env::set_var("HTTP_PORT", "not-a-port");

        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("HTTP_PORT"));

        clear_env();
    }
}
