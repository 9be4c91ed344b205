// ABOUTME: Main library entry point for the Trailsmith trail generator demo
// ABOUTME: Hosts the secrets gateway, chat-completion relay, and client-side generation chain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

#![deny(unsafe_code)]

//! # Trailsmith
//!
//! A small trail-generator service and client. A user picks a starting point,
//! a transport mode, a duration, and a difficulty; the client asks a
//! chat-completion model to synthesize a fictitious trail (name, theme,
//! description, waypoints) and renders the result as text panels, a step list,
//! and a GeoJSON `LineString` for an externally-owned map widget.
//!
//! The server exists solely to keep third-party credentials out of the client:
//! it reads two named rows from a secrets store and relays chat-completion
//! calls to the upstream provider with a server-held bearer key.
//!
//! ## Components
//!
//! - **Secrets gateway** (`GET /secrets-config`): two point lookups against the
//!   secrets store, returned as one credential pair or a single 500.
//! - **Chat relay** (`POST /chat-relay`): opaque pass-through to the upstream
//!   chat-completion endpoint, upstream status and body relayed verbatim.
//! - **Client chain**: credential fetch, prompt construction, relay call,
//!   response validation, rendering. One user action triggers one linear chain
//!   of awaits; a second trigger while one is pending is rejected.
//!
//! ## Example
//!
//! ```rust,no_run
//! use trailsmith::config::ServerConfig;
//! use trailsmith::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("trailsmith server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Client-side generation chain (the role the browser script plays)
pub mod client;

/// Configuration management (environment-only)
pub mod config;

/// Unified error handling with HTTP responses
pub mod errors;

/// External API clients (secrets store)
pub mod external;

/// Chat-completion wire types and upstream relay client
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Rendering of validated trails (panels, subway diagram, GeoJSON)
pub mod render;

/// Shared server state for HTTP handlers
pub mod resources;

/// `HTTP` routes for the secrets gateway and chat relay
pub mod routes;

/// Trail domain types, prompt construction, and response validation
pub mod trail;
