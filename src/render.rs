// ABOUTME: Presentation sink rendering validated trails as panels, step list, and GeoJSON
// ABOUTME: All-or-nothing per cycle; a rejected response yields only a failure notice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Trailsmith Project

//! Trail rendering
//!
//! The display regions mirror the original demo: one panel per scalar field,
//! an ordered waypoint list (the "subway diagram"), and a line drawn through
//! the waypoints on the externally-owned map widget. The widget consumes a
//! GeoJSON `LineString` layer, so that layer is what gets emitted here.
//! Rendering is all-or-nothing: an invalid cycle produces a failure notice and
//! nothing else, never a partial trail.

use serde_json::{json, Value};

use crate::trail::models::Trail;
use crate::trail::validate::{InvalidReason, TrailValidation};

/// Map layer id for the trail line
pub const TRAIL_LINE_LAYER_ID: &str = "trail-line";

/// Line color for the trail overlay
pub const TRAIL_LINE_COLOR: &str = "#3887be";

/// Line width for the trail overlay
pub const TRAIL_LINE_WIDTH: u32 = 5;

/// Render the scalar trail fields as labeled text panels
#[must_use]
pub fn render_panels(trail: &Trail) -> String {
    format!(
        "Name:        {name}\n\
         Theme:       {theme}\n\
         Mode:        {mode}\n\
         Distance:    {distance}\n\
         Difficulty:  {difficulty}\n\
         Description: {description}\n",
        name = trail.name,
        theme = trail.theme,
        mode = trail.mode,
        distance = trail.distance,
        difficulty = trail.difficulty,
        description = trail.description,
    )
}

/// Render the ordered waypoint list ("subway diagram")
///
/// Empty when the trail has no waypoints; the caller decides whether to note
/// that.
#[must_use]
pub fn render_subway_diagram(trail: &Trail) -> String {
    trail
        .waypoints
        .iter()
        .enumerate()
        .map(|(index, waypoint)| format!("{}. {}\n", index + 1, waypoint.name))
        .collect()
}

/// GeoJSON `LineString` feature through the trail's waypoints
///
/// `None` when there are no waypoints to draw.
#[must_use]
pub fn line_string_feature(trail: &Trail) -> Option<Value> {
    if trail.waypoints.is_empty() {
        return None;
    }

    let coordinates: Vec<Value> = trail
        .waypoints
        .iter()
        .map(|waypoint| json!(waypoint.coordinates))
        .collect();

    Some(json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "LineString",
            "coordinates": coordinates,
        },
    }))
}

/// Full map layer definition for the trail line, as the map widget expects it
#[must_use]
pub fn trail_line_layer(trail: &Trail) -> Option<Value> {
    let feature = line_string_feature(trail)?;

    Some(json!({
        "id": TRAIL_LINE_LAYER_ID,
        "type": "line",
        "source": {
            "type": "geojson",
            "data": feature,
        },
        "layout": {
            "line-join": "round",
            "line-cap": "round",
        },
        "paint": {
            "line-color": TRAIL_LINE_COLOR,
            "line-width": TRAIL_LINE_WIDTH,
        },
    }))
}

/// User-facing failure notice for a rejected generation cycle
#[must_use]
pub fn render_failure_notice(reason: &InvalidReason) -> String {
    format!("Failed to generate trail. Please try again. ({reason})\n")
}

/// Render one full generation cycle
///
/// A valid trail yields panels, the subway diagram, and the map layer (when
/// waypoints exist); an invalid one yields only the failure notice.
#[must_use]
pub fn render_report(validation: &TrailValidation) -> String {
    match validation {
        TrailValidation::Valid(trail) => {
            let mut report = render_panels(trail);
            if trail.waypoints.is_empty() {
                report.push_str("\nNo waypoints to display.\n");
            } else {
                report.push_str("\nWaypoints:\n");
                report.push_str(&render_subway_diagram(trail));
                if let Some(layer) = trail_line_layer(trail) {
                    report.push_str("\nMap layer (GeoJSON):\n");
                    report.push_str(&format!("{layer:#}\n"));
                }
            }
            report
        }
        TrailValidation::Invalid(reason) => render_failure_notice(reason),
    }
}
