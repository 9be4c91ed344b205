// ABOUTME: Tracing subscriber initialization for binaries and tests
// ABOUTME: Honors RUST_LOG via EnvFilter, defaulting to info-level output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Logging initialization

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global tracing subscriber
///
/// Safe to call more than once; later calls are no-ops. Filter level comes
/// from `RUST_LOG`, defaulting to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
