// ABOUTME: Trail domain types: generation requests, trails, and waypoints
// ABOUTME: Normalizes comma-separated coordinate text into numeric longitude/latitude pairs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trail domain types
//!
//! A trail exists only in memory for one render cycle. Coordinates are always
//! `[longitude, latitude]`, matching the map widget's GeoJSON convention; the
//! model sometimes emits them as a comma-separated string, so normalization
//! lives here.

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// User inputs for one trail generation, constructed fresh per action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrailRequest {
    /// Starting point as `[longitude, latitude]`
    pub coordinates: [f64; 2],
    /// Transport mode (e.g., "walking", "cycling")
    pub mode: String,
    /// Desired duration (free text, e.g., "1 hour")
    pub duration: String,
    /// Desired difficulty (free text, e.g., "easy")
    pub difficulty: String,
}

/// A named point along a trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Waypoint name
    pub name: String,
    /// `[longitude, latitude]`
    pub coordinates: [f64; 2],
}

/// A synthesized trail, validated and ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trail {
    /// Trail name
    pub name: String,
    /// Trail theme
    pub theme: String,
    /// Transport mode
    pub mode: String,
    /// Distance (free text from the model, e.g., "3km")
    pub distance: String,
    /// Difficulty level
    pub difficulty: String,
    /// Trail description
    pub description: String,
    /// Ordered waypoints; may be empty when the model omits them
    #[serde(default)]
    pub waypoints: Vec<Waypoint>,
}

/// Parse comma-separated coordinate text into a `[longitude, latitude]` pair
///
/// Accepts exactly two comma-separated parts, each a float after trimming.
/// Anything else (missing part, third part, non-numeric text) yields `None`.
#[must_use]
pub fn parse_coordinate_pair(text: &str) -> Option<[f64; 2]> {
    let mut parts = text.split(',');
    let lng: f64 = parts.next()?.trim().parse().ok()?;
    let lat: f64 = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some([lng, lat])
}

/// Parse coordinate text from a form field, with a caller-facing error
///
/// # Errors
/// Returns invalid-input when the text is not a two-part numeric pair.
pub fn coordinate_pair_from_input(text: &str) -> AppResult<[f64; 2]> {
    parse_coordinate_pair(text).ok_or_else(|| {
        AppError::invalid_input(format!(
            "starting point must be 'longitude,latitude', got '{text}'"
        ))
    })
}
