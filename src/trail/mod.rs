// ABOUTME: Trail domain module organization
// ABOUTME: Models, prompt construction, and model-output validation for trail generation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trail generation domain
//!
//! The prompt template is deterministic; the model's answer is explicitly not.
//! That boundary is owned by [`validate`], which turns free-form model output
//! into either a usable [`models::Trail`] or a named rejection.

/// Trail, waypoint, and request types plus coordinate normalization
pub mod models;

/// Prompt construction for the chat-completion request
pub mod prompt;

/// Gate-ordered validation of relay responses
pub mod validate;

pub use models::{parse_coordinate_pair, Trail, TrailRequest, Waypoint};
pub use prompt::{build_trail_prompt, chat_completion_body, ModelParams};
pub use validate::{validate_relay_response, InvalidReason, TrailValidation};
