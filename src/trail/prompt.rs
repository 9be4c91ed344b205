// ABOUTME: Prompt construction for trail generation requests
// ABOUTME: Renders user inputs into the natural-language instruction and the upstream request body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trail prompt construction
//!
//! The template is deterministic for given inputs and spells out the exact
//! JSON schema the model must answer with. Whether the model honors it is the
//! validator's problem, not this module's.

use crate::llm::{ChatCompletionRequest, ChatMessage, ResponseFormat};
use crate::trail::models::TrailRequest;

/// Default model for trail generation
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Default completion token cap
pub const DEFAULT_MAX_TOKENS: u32 = 200;

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Model parameters for the generation request
#[derive(Debug, Clone)]
pub struct ModelParams {
    /// Model identifier
    pub model: String,
    /// Completion token cap
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Render the natural-language prompt for one trail request
#[must_use]
pub fn build_trail_prompt(request: &TrailRequest) -> String {
    let [lng, lat] = request.coordinates;
    format!(
        "Generate a trail starting at coordinates {lng}, {lat} with the following criteria:\n\
         - Mode of transport: {mode}\n\
         - Duration: {duration}\n\
         - Difficulty: {difficulty}\n\
         \n\
         Provide the trail details in JSON format with the following fields:\n\
         - name: The name of the trail\n\
         - theme: The theme of the trail\n\
         - mode: The mode of transport\n\
         - distance: The distance of the trail\n\
         - difficulty: The difficulty level\n\
         - description: A description of the trail\n\
         - waypoints: An array of waypoints, each with a name and coordinates \
         (a two-element array of numbers, longitude then latitude)",
        mode = request.mode,
        duration = request.duration,
        difficulty = request.difficulty,
    )
}

/// Build the full chat-completion request body for one trail request
#[must_use]
pub fn chat_completion_body(request: &TrailRequest, params: &ModelParams) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: params.model.clone(),
        messages: vec![ChatMessage::user(build_trail_prompt(request))],
        max_tokens: params.max_tokens,
        temperature: params.temperature,
        response_format: ResponseFormat::json_object(),
    }
}
