// ABOUTME: Unified error handling system with constructor helpers and HTTP responses
// ABOUTME: Every handler returns AppResult; failures become JSON error bodies, never panics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Unified error handling
//!
//! All fallible paths in the crate return [`AppError`]. On the server side the
//! `IntoResponse` impl converts an error into an `{"error": ...}` JSON body
//! with the appropriate status code, matching the error taxonomy:
//! configuration and transport failures are 500 and fatal to the whole chain,
//! caller mistakes are 400. Upstream rejections are NOT errors here - the
//! relay forwards those verbatim as successful handler responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result alias used across the crate
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or unusable configuration (absent env var, absent secret row)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The caller supplied something unusable
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A named resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// A third-party service could not be reached or answered unusably
    #[error("{service} error: {message}")]
    ExternalService {
        /// Human-readable name of the external service
        service: String,
        /// What went wrong
        message: String,
    },

    /// Anything else; details stay server-side
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Invalid caller input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Missing resource
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// External service failure
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error maps to
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Config(_) | Self::ExternalService { .. } | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
