// ABOUTME: Gate-ordered validation of relay responses into trails
// ABOUTME: Terminal states are Valid(Trail) or Invalid(reason); nothing in here panics on model output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trail response validation
//!
//! The model is asked for JSON but is not guaranteed to emit it, so every
//! parse here is explicit and fallible. Gates run in order:
//!
//! 1. relay HTTP status must be success,
//! 2. the envelope must contain a first choice with message content,
//! 3. that content must parse as a JSON object,
//! 4. the six scalar fields must be present and non-empty,
//! 5. `waypoints`, if present, must be a sequence; each element is normalized.
//!
//! A malformed waypoint is skipped with a warning rather than failing the
//! whole trail: partial display beats total failure for a demo-grade tool.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::trail::models::{parse_coordinate_pair, Trail, Waypoint};

/// Scalar fields a trail must carry before display
pub const REQUIRED_FIELDS: [&str; 6] = [
    "name",
    "theme",
    "mode",
    "distance",
    "difficulty",
    "description",
];

/// Why a relay response did not become a trail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidReason {
    /// The relay call itself failed (non-success HTTP status)
    #[error("transport failure: HTTP {0}")]
    TransportFailure(u16),

    /// The envelope carried no usable completion choice
    #[error("empty completion")]
    EmptyCompletion,

    /// The model's text content was not a JSON object (or `waypoints` was not
    /// a sequence)
    #[error("malformed model output")]
    MalformedModelOutput,

    /// A required scalar field was absent or empty
    #[error("missing required field: {0}")]
    MissingRequiredField(String),
}

/// Terminal validation state for one generation cycle
#[derive(Debug, Clone)]
pub enum TrailValidation {
    /// The trail passed every gate and is ready for display
    Valid(Trail),
    /// The response was rejected; nothing from it may be displayed
    Invalid(InvalidReason),
}

impl TrailValidation {
    /// The validated trail, if any
    #[must_use]
    pub const fn trail(&self) -> Option<&Trail> {
        match self {
            Self::Valid(trail) => Some(trail),
            Self::Invalid(_) => None,
        }
    }
}

/// Validate a relay response (HTTP status plus JSON body) into a trail
#[must_use]
pub fn validate_relay_response(status: u16, body: &Value) -> TrailValidation {
    if !(200..300).contains(&status) {
        return TrailValidation::Invalid(InvalidReason::TransportFailure(status));
    }

    let Some(content) = body
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
    else {
        return TrailValidation::Invalid(InvalidReason::EmptyCompletion);
    };

    validate_model_content(content)
}

/// Validate the model's text content into a trail
///
/// This is the part of the pipeline that faces free-form model output
/// directly, so the JSON parse failure path is an expected outcome, not an
/// exceptional one.
#[must_use]
pub fn validate_model_content(content: &str) -> TrailValidation {
    match try_validate_model_content(content) {
        Ok(trail) => TrailValidation::Valid(trail),
        Err(reason) => TrailValidation::Invalid(reason),
    }
}

fn try_validate_model_content(content: &str) -> Result<Trail, InvalidReason> {
    let value: Value =
        serde_json::from_str(content).map_err(|_| InvalidReason::MalformedModelOutput)?;
    let object = value.as_object().ok_or(InvalidReason::MalformedModelOutput)?;

    // Gate 4: reported in REQUIRED_FIELDS order, first missing field wins.
    for field in REQUIRED_FIELDS {
        if scalar_field(object, field).is_none() {
            return Err(InvalidReason::MissingRequiredField(field.to_owned()));
        }
    }
    let require = |field: &'static str| {
        scalar_field(object, field)
            .ok_or_else(|| InvalidReason::MissingRequiredField(field.to_owned()))
    };

    let waypoints = match object.get("waypoints") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => normalize_waypoints(items),
        Some(_) => return Err(InvalidReason::MalformedModelOutput),
    };

    Ok(Trail {
        name: require("name")?,
        theme: require("theme")?,
        mode: require("mode")?,
        distance: require("distance")?,
        difficulty: require("difficulty")?,
        description: require("description")?,
        waypoints,
    })
}

/// Read a required scalar field, tolerating numeric values
///
/// Models occasionally answer `"distance": 3` instead of `"distance": "3km"`;
/// numbers are stringified rather than rejected.
fn scalar_field(object: &Map<String, Value>, name: &str) -> Option<String> {
    match object.get(name)? {
        Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Normalize raw waypoint values, skipping malformed ones
fn normalize_waypoints(items: &[Value]) -> Vec<Waypoint> {
    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match normalize_waypoint(item) {
            Some(waypoint) => Some(waypoint),
            None => {
                warn!("skipping malformed waypoint at index {index}");
                None
            }
        })
        .collect()
}

fn normalize_waypoint(item: &Value) -> Option<Waypoint> {
    let name = item.get("name").and_then(Value::as_str)?;
    if name.trim().is_empty() {
        return None;
    }
    let coordinates = normalize_coordinates(item.get("coordinates")?)?;

    Some(Waypoint {
        name: name.to_owned(),
        coordinates,
    })
}

/// Coerce waypoint coordinates to a numeric pair
///
/// Accepts a two-element array of numbers (or numeric strings) or a single
/// comma-separated string, the two shapes the model actually produces.
fn normalize_coordinates(value: &Value) -> Option<[f64; 2]> {
    match value {
        Value::String(text) => parse_coordinate_pair(text),
        Value::Array(parts) if parts.len() == 2 => {
            let lng = coordinate_component(&parts[0])?;
            let lat = coordinate_component(&parts[1])?;
            Some([lng, lat])
        }
        _ => None,
    }
}

fn coordinate_component(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]

    use super::*;
    use serde_json::json;

    fn envelope(content: &str) -> Value {
        json!({ "choices": [ { "message": { "content": content } } ] })
    }

    fn riverwalk_content() -> String {
        json!({
            "name": "Riverwalk",
            "theme": "nature",
            "mode": "walking",
            "distance": "3km",
            "difficulty": "easy",
            "description": "A scenic walk.",
            "waypoints": [ { "name": "Start", "coordinates": "153.02,-27.47" } ]
        })
        .to_string()
    }

    fn expect_invalid(validation: &TrailValidation, expected: &InvalidReason) {
        match validation {
            TrailValidation::Invalid(reason) => assert_eq!(reason, expected),
            TrailValidation::Valid(trail) => panic!("expected rejection, got trail {trail:?}"),
        }
    }

    #[test]
    fn non_success_status_is_transport_failure() {
        let validation = validate_relay_response(429, &json!({"error": "quota"}));
        expect_invalid(&validation, &InvalidReason::TransportFailure(429));
    }

    #[test]
    fn envelope_without_choices_is_empty_completion() {
        let validation = validate_relay_response(200, &json!({"choices": []}));
        expect_invalid(&validation, &InvalidReason::EmptyCompletion);
    }

    #[test]
    fn non_json_content_is_malformed_not_a_crash() {
        let validation = validate_relay_response(200, &envelope("Here is your trail: ..."));
        expect_invalid(&validation, &InvalidReason::MalformedModelOutput);
    }

    #[test]
    fn json_array_content_is_malformed() {
        let validation = validate_model_content("[1, 2, 3]");
        expect_invalid(&validation, &InvalidReason::MalformedModelOutput);
    }

    #[test]
    fn missing_description_names_the_field() {
        let content = json!({
            "name": "Riverwalk",
            "theme": "nature",
            "mode": "walking",
            "distance": "3km",
            "difficulty": "easy"
        })
        .to_string();

        let validation = validate_model_content(&content);
        expect_invalid(
            &validation,
            &InvalidReason::MissingRequiredField("description".to_owned()),
        );
    }

    #[test]
    fn empty_scalar_counts_as_missing() {
        let content = json!({
            "name": "  ",
            "theme": "nature",
            "mode": "walking",
            "distance": "3km",
            "difficulty": "easy",
            "description": "A scenic walk."
        })
        .to_string();

        let validation = validate_model_content(&content);
        expect_invalid(
            &validation,
            &InvalidReason::MissingRequiredField("name".to_owned()),
        );
    }

    #[test]
    fn riverwalk_sample_validates_with_normalized_coordinates() {
        let validation = validate_relay_response(200, &envelope(&riverwalk_content()));
        let trail = validation.trail().expect("riverwalk should validate");
        assert_eq!(trail.name, "Riverwalk");
        assert_eq!(trail.waypoints.len(), 1);
        assert_eq!(trail.waypoints[0].coordinates, [153.02, -27.47]);
    }

    #[test]
    fn waypoints_absent_yields_empty_list() {
        let content = json!({
            "name": "Riverwalk",
            "theme": "nature",
            "mode": "walking",
            "distance": "3km",
            "difficulty": "easy",
            "description": "A scenic walk."
        })
        .to_string();

        let trail = validate_model_content(&content).trail().unwrap().clone();
        assert!(trail.waypoints.is_empty());
    }

    #[test]
    fn waypoints_not_a_sequence_is_malformed() {
        let content = json!({
            "name": "Riverwalk",
            "theme": "nature",
            "mode": "walking",
            "distance": "3km",
            "difficulty": "easy",
            "description": "A scenic walk.",
            "waypoints": "Start, End"
        })
        .to_string();

        let validation = validate_model_content(&content);
        expect_invalid(&validation, &InvalidReason::MalformedModelOutput);
    }

    #[test]
    fn malformed_waypoint_is_skipped_not_fatal() {
        let content = json!({
            "name": "Riverwalk",
            "theme": "nature",
            "mode": "walking",
            "distance": "3km",
            "difficulty": "easy",
            "description": "A scenic walk.",
            "waypoints": [
                { "name": "Start", "coordinates": [153.02, -27.47] },
                { "name": "Broken", "coordinates": "east,west" },
                { "coordinates": [153.03, -27.48] },
                { "name": "End", "coordinates": ["153.04", "-27.49"] }
            ]
        })
        .to_string();

        let trail = validate_model_content(&content).trail().unwrap().clone();
        assert_eq!(trail.waypoints.len(), 2);
        assert_eq!(trail.waypoints[0].name, "Start");
        assert_eq!(trail.waypoints[1].name, "End");
        assert_eq!(trail.waypoints[1].coordinates, [153.04, -27.49]);
    }

    #[test]
    fn numeric_distance_is_tolerated() {
        let content = json!({
            "name": "Riverwalk",
            "theme": "nature",
            "mode": "walking",
            "distance": 3,
            "difficulty": "easy",
            "description": "A scenic walk."
        })
        .to_string();

        let trail = validate_model_content(&content).trail().unwrap().clone();
        assert_eq!(trail.distance, "3");
    }
}
