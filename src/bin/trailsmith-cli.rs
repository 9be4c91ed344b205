// ABOUTME: CLI client driving the trail generation chain against a running server
// ABOUTME: Fetches credentials, generates a trail, and prints panels, step list, and GeoJSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trailsmith CLI
//!
//! Plays the browser's role: select a starting point, pick mode, duration,
//! and difficulty, then run one generation chain and render the outcome. A
//! rejected model response prints a failure notice and exits non-zero.

use anyhow::Result;
use clap::Parser;
use tracing::info;

use trailsmith::client::TrailClient;
use trailsmith::render::render_report;
use trailsmith::trail::prompt::{
    ModelParams, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
use trailsmith::trail::validate::TrailValidation;

/// Generate a fictitious trail from a starting point
#[derive(Debug, Parser)]
#[command(name = "trailsmith-cli", version)]
struct Cli {
    /// Trailsmith server base URL
    #[arg(long, default_value = "http://127.0.0.1:8081")]
    server: String,

    /// Starting point as "longitude,latitude"
    #[arg(long)]
    start: String,

    /// Transport mode
    #[arg(long, default_value = "walking")]
    mode: String,

    /// Desired duration
    #[arg(long, default_value = "1 hour")]
    duration: String,

    /// Desired difficulty
    #[arg(long, default_value = "easy")]
    difficulty: String,

    /// Model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Completion token cap
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: u32,

    /// Sampling temperature
    #[arg(long, default_value_t = DEFAULT_TEMPERATURE)]
    temperature: f32,
}

#[tokio::main]
async fn main() -> Result<()> {
    trailsmith::logging::init();
    let cli = Cli::parse();

    let mut client = TrailClient::new(cli.server).with_model_params(ModelParams {
        model: cli.model,
        max_tokens: cli.max_tokens,
        temperature: cli.temperature,
    });
    client.select_starting_point(&cli.start)?;

    let credentials = client.fetch_credentials().await?;
    info!(
        "credentials acquired; map widget token is {} chars",
        credentials.mapbox_access_token.len()
    );

    let validation = client
        .generate(&cli.mode, &cli.duration, &cli.difficulty)
        .await?;

    print!("{}", render_report(&validation));

    if matches!(validation, TrailValidation::Invalid(_)) {
        std::process::exit(1);
    }
    Ok(())
}
