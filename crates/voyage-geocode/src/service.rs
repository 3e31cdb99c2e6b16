//! Geocoding service: cache → gazetteer → remote, first hit wins

use crate::cache::GeocodeCache;
use crate::gazetteer::Gazetteer;
use crate::mapbox::{MapboxSource, RemoteGeocoder, SourceError};
use voyage_domain::{GeocodeFailure, GeocodeResult};

/// Confidence assigned to gazetteer hits; cache hits report 1.0 and remote
/// hits carry the API's own relevance score.
const GAZETTEER_CONFIDENCE: f64 = 0.9;

/// Resolves place names to coordinates.
///
/// Owns its cache and gazetteer; the remote source is optional — without an
/// API token the service runs in gazetteer-only mode and every unknown name
/// is simply a miss.
pub struct GeocodingService<R = MapboxSource> {
    cache: GeocodeCache,
    gazetteer: Gazetteer,
    remote: Option<R>,
}

impl GeocodingService<MapboxSource> {
    /// Service backed by the live Mapbox API; `None` token means
    /// gazetteer-only mode.
    pub fn new(access_token: Option<&str>) -> Self {
        Self::with_remote(access_token.map(MapboxSource::new))
    }
}

impl<R: RemoteGeocoder> GeocodingService<R> {
    pub fn with_remote(remote: Option<R>) -> Self {
        Self {
            cache: GeocodeCache::new(),
            gazetteer: Gazetteer,
            remote,
        }
    }

    pub fn cache(&self) -> &GeocodeCache {
        &self.cache
    }

    /// Resolve one place name. `Ok(None)` is a plain miss; `Err` carries
    /// the remote fault for failure reporting but must not abort a run.
    pub async fn geocode(&mut self, name: &str) -> Result<Option<GeocodeResult>, GeocodeFailure> {
        if let Some(hit) = self.cache.get(name) {
            return Ok(Some(hit));
        }

        if let Some(coordinates) = self.gazetteer.lookup(name) {
            let result = GeocodeResult {
                name: name.trim().to_string(),
                coordinates,
                confidence: GAZETTEER_CONFIDENCE,
            };
            self.cache.insert(name, result.clone());
            return Ok(Some(result));
        }

        let Some(remote) = &self.remote else {
            return Ok(None);
        };

        // The remote gets the raw name: Mapbox's own matching handles
        // casing and accents better than our comparison key would
        match remote.search(name).await {
            Ok(hits) => match hits.into_iter().next() {
                Some(hit) => {
                    let result = GeocodeResult {
                        name: hit.place_name,
                        coordinates: hit.coordinates,
                        confidence: hit.relevance,
                    };
                    self.cache.insert(name, result.clone());
                    Ok(Some(result))
                }
                None => Ok(None),
            },
            Err(error) => {
                tracing::warn!(place = name, %error, "remote geocoding failed");
                Err(match error {
                    SourceError::Http(e) => GeocodeFailure::Network(e.to_string()),
                    SourceError::Parse(message) => GeocodeFailure::Network(message),
                })
            }
        }
    }
}
