//! Location types produced by the geocoding pipeline
//!
//! A raw location string moves through four stages:
//! `ParsedLocation` (tokenized) → `ClassifiedLocation` (role assigned) →
//! `MapLocation` (coordinates attached) or `FailedLocation` (unresolved,
//! kept for user review). Only validated `MapLocation` lists are persisted.

use serde::{Deserialize, Serialize};

/// Coordinates in `[longitude, latitude]` order, matching both the persisted
/// records and the Mapbox `center` field.
pub type LonLat = [f64; 2];

/// Role of a place within one day's entry.
///
/// The last-mentioned place of a day is its destination (`Principal`);
/// everything before it is a waypoint passed through (`Secondaire`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationRole {
    #[serde(rename = "principal")]
    Principal,
    #[serde(rename = "secondaire")]
    Secondaire,
}

/// Tokenized form of one entry's raw location string. Ephemeral: recomputed
/// from the journal entry on every run, never persisted.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedLocation {
    pub original: String,
    pub parsed: Vec<String>,
    pub day: u32,
}

/// A place name with its role for a given day, before geocoding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedLocation {
    pub name: String,
    #[serde(rename = "type")]
    pub role: LocationRole,
    pub day: u32,
}

/// A classified place with resolved coordinates. Collected into a pending
/// list awaiting human validation; the validated list is the only durable
/// output of a geocoding run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub name: String,
    #[serde(rename = "type")]
    pub role: LocationRole,
    pub day: u32,
    pub coordinates: LonLat,
    pub confidence: f64,
}

impl MapLocation {
    pub fn from_classified(classified: &ClassifiedLocation, coordinates: LonLat, confidence: f64) -> Self {
        Self {
            name: classified.name.clone(),
            role: classified.role,
            day: classified.day,
            coordinates,
            confidence,
        }
    }
}

/// Why a place name could not be geocoded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GeocodeFailure {
    /// Not in the cache or gazetteer, and the remote source had no feature
    /// for it (or no remote source was configured).
    NotFound,
    /// The remote call itself faulted (transport error, bad response).
    Network(String),
}

/// A token that could not be resolved to coordinates. Retained for user
/// review and manual correction, never silently dropped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FailedLocation {
    pub name: String,
    pub day: u32,
    pub reason: GeocodeFailure,
}

/// Outcome of resolving a single place name.
#[derive(Clone, Debug, PartialEq)]
pub struct GeocodeResult {
    pub name: String,
    pub coordinates: LonLat,
    /// 1.0 for a cache hit, 0.9 for a gazetteer hit, the API relevance
    /// score otherwise.
    pub confidence: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_french() {
        assert_eq!(
            serde_json::to_string(&LocationRole::Principal).unwrap(),
            "\"principal\""
        );
        assert_eq!(
            serde_json::to_string(&LocationRole::Secondaire).unwrap(),
            "\"secondaire\""
        );
    }

    #[test]
    fn test_map_location_json_shape() {
        let classified = ClassifiedLocation {
            name: "Amman".to_string(),
            role: LocationRole::Principal,
            day: 1,
        };
        let loc = MapLocation::from_classified(&classified, [35.9106, 31.9539], 0.9);
        let json = serde_json::to_string(&loc).unwrap();
        assert!(json.contains("\"type\":\"principal\""));
        assert!(json.contains("[35.9106,31.9539]"));
    }
}
