//! Mapbox Geocoding v5 source
//!
//! API docs: https://docs.mapbox.com/api/search/geocoding-v5/
//! Requests are restricted to Jordan and place-like feature types, limit 1.

use crate::http::{HttpClient, HttpError};
use serde::Deserialize;
use thiserror::Error;
use voyage_domain::LonLat;

const BASE_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
const COUNTRY: &str = "JO";
const TYPES: &str = "place,locality,neighborhood";

#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Http(#[from] HttpError),
    #[error("Invalid Mapbox JSON: {0}")]
    Parse(String),
}

/// One feature from a geocoding response.
#[derive(Clone, Debug, PartialEq)]
pub struct RemoteHit {
    pub place_name: String,
    pub coordinates: LonLat,
    pub relevance: f64,
}

#[derive(Debug, Deserialize)]
struct MapboxResponse {
    #[serde(default)]
    features: Vec<MapboxFeature>,
}

#[derive(Debug, Deserialize)]
struct MapboxFeature {
    place_name: String,
    center: LonLat,
    #[serde(default = "default_relevance")]
    relevance: f64,
}

fn default_relevance() -> f64 {
    1.0
}

/// Parse a geocoding response body. Zero features is a valid empty result,
/// not an error.
pub fn parse_places_response(json: &str) -> Result<Vec<RemoteHit>, SourceError> {
    let response: MapboxResponse =
        serde_json::from_str(json).map_err(|e| SourceError::Parse(e.to_string()))?;

    Ok(response
        .features
        .into_iter()
        .map(|f| RemoteHit {
            place_name: f.place_name,
            coordinates: f.center,
            relevance: f.relevance,
        })
        .collect())
}

/// The remote half of the geocoder, abstracted so tests can substitute a
/// canned source for the live API.
pub trait RemoteGeocoder {
    /// Search for a place by its raw (non-normalized) name. An empty vec
    /// means the source knows nothing about it.
    fn search(
        &self,
        name: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RemoteHit>, SourceError>>;
}

/// Live Mapbox client. Holds the access token supplied by the caller; the
/// token's absence upstream means the service runs gazetteer-only and this
/// source is never constructed.
pub struct MapboxSource {
    http: HttpClient,
    access_token: String,
}

impl MapboxSource {
    pub fn new(access_token: &str) -> Self {
        Self {
            http: HttpClient::default(),
            access_token: access_token.to_string(),
        }
    }

    fn endpoint(name: &str) -> String {
        format!("{}/{}.json", BASE_URL, urlencoding::encode(name))
    }
}

impl RemoteGeocoder for MapboxSource {
    async fn search(&self, name: &str) -> Result<Vec<RemoteHit>, SourceError> {
        let url = Self::endpoint(name);
        let response = self
            .http
            .get_with_params(
                &url,
                &[
                    ("access_token", self.access_token.as_str()),
                    ("country", COUNTRY),
                    ("types", TYPES),
                    ("limit", "1"),
                ],
            )
            .await?;

        // Non-2xx means "not found" to the caller, not a hard failure
        if !(200..300).contains(&response.status) {
            tracing::warn!(status = response.status, place = name, "Mapbox returned non-OK status");
            return Ok(Vec::new());
        }

        parse_places_response(&response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RESPONSE: &str = r#"{
        "features": [{
            "place_name": "Umm Qais, Irbid, Jordan",
            "center": [35.6853, 32.6561],
            "relevance": 0.85
        }]
    }"#;

    #[test]
    fn test_parse_places_response() {
        let hits = parse_places_response(SAMPLE_RESPONSE).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].place_name, "Umm Qais, Irbid, Jordan");
        assert_eq!(hits[0].coordinates, [35.6853, 32.6561]);
        assert_eq!(hits[0].relevance, 0.85);
    }

    #[test]
    fn test_parse_zero_features_is_empty_not_error() {
        let hits = parse_places_response(r#"{"features": []}"#).unwrap();
        assert!(hits.is_empty());
        // Some error payloads omit features entirely
        let hits = parse_places_response(r#"{"message": "Not Authorized"}"#).unwrap();
        assert!(hits.is_empty());
    }

    #[test]
    fn test_parse_malformed_json_is_error() {
        assert!(parse_places_response("not json").is_err());
    }

    #[test]
    fn test_endpoint_urlencodes_name() {
        let url = MapboxSource::endpoint("région de Dana");
        assert_eq!(
            url,
            "https://api.mapbox.com/geocoding/v5/mapbox.places/r%C3%A9gion%20de%20Dana.json"
        );
    }
}
