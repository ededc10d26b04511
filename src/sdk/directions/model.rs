use std::io::Read;

use serde::{Deserialize, Serialize};

use super::error::DirectionsError;

// --- Data structures for parsing directions responses ---
//
// Only the fields the itinerary needs are modeled; everything else the
// service sends is ignored. Missing fields decode to zero values so a
// partially populated document still yields a usable result. The lists the
// program never interprets (warnings, waypoint order, via waypoints) stay
// untyped JSON values.

/// A latitude/longitude pair in floating-point degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A human-readable text plus its machine value. Used for both distances
/// (value in meters) and durations (value in seconds).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextValue {
    pub text: String,
    pub value: i64,
}

/// An encoded polyline for a path's geometry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Polyline {
    pub points: String,
}

/// Bounding box of a route, given by its northeast and southwest corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bounds {
    pub northeast: Location,
    pub southwest: Location,
}

/// One maneuver within a leg. `html_instructions` carries the service's
/// inline markup verbatim; strip it before showing it to a person.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_location: Location,
    pub end_location: Location,
    pub html_instructions: String,
    pub polyline: Polyline,
    pub travel_mode: String,
}

/// One origin-to-destination segment of a route. Steps are kept in travel
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Leg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub start_address: String,
    pub end_address: String,
    pub start_location: Location,
    pub end_location: Location,
    pub steps: Vec<Step>,
    pub via_waypoint: Vec<serde_json::Value>,
}

/// One complete path between the requested endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Route {
    pub bounds: Bounds,
    pub copyrights: String,
    pub legs: Vec<Leg>,
    pub overview_polyline: Polyline,
    pub summary: String,
    pub warnings: Vec<serde_json::Value>,
    pub waypoint_order: Vec<serde_json::Value>,
}

/// Top-level directions response. Routes arrive in the service's preference
/// order; `status` is the service's logical result code ("OK",
/// "ZERO_RESULTS", ...) and is passed through uninterpreted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionsResult {
    pub routes: Vec<Route>,
    pub status: String,
}

/// Decodes a directions document out of a byte stream.
///
/// Structurally invalid JSON, an empty stream, and read failures all map to
/// [`DirectionsError::Decode`]. A document whose `status` reports a logical
/// failure still decodes successfully.
pub fn decode_directions(reader: impl Read) -> Result<DirectionsResult, DirectionsError> {
    let directions: DirectionsResult = serde_json::from_reader(reader)?;
    Ok(directions)
}
