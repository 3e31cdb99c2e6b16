//! In-memory geocode result cache

use crate::gazetteer::Gazetteer;
use std::collections::HashMap;
use voyage_domain::GeocodeResult;

/// Memoized geocode results, keyed by the normalized place name.
///
/// Owned by the `GeocodingService` instance rather than living in module
/// scope, so concurrent runs (tests, sessions) never cross-contaminate.
/// Entries are never evicted; the key space is bounded by one itinerary's
/// place names. A long-running service sharing a cache across users would
/// need eviction or a per-request scope.
#[derive(Clone, Debug, Default)]
pub struct GeocodeCache {
    entries: HashMap<String, GeocodeResult>,
}

impl GeocodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache hits are reported with full confidence.
    pub fn get(&self, name: &str) -> Option<GeocodeResult> {
        self.entries.get(&Gazetteer::normalize(name)).map(|hit| GeocodeResult {
            confidence: 1.0,
            ..hit.clone()
        })
    }

    pub fn insert(&mut self, name: &str, result: GeocodeResult) {
        self.entries.insert(Gazetteer::normalize(name), result);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, confidence: f64) -> GeocodeResult {
        GeocodeResult {
            name: name.to_string(),
            coordinates: [35.9106, 31.9539],
            confidence,
        }
    }

    #[test]
    fn test_hit_reports_full_confidence() {
        let mut cache = GeocodeCache::new();
        cache.insert("Amman", result("Amman", 0.9));
        let hit = cache.get("amman").unwrap();
        assert_eq!(hit.confidence, 1.0);
        assert_eq!(hit.name, "Amman");
    }

    #[test]
    fn test_keys_are_normalized() {
        let mut cache = GeocodeCache::new();
        cache.insert("  AMMAN ", result("Amman", 0.9));
        assert!(cache.get("Amman").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_miss_returns_none() {
        assert!(GeocodeCache::new().get("Petra").is_none());
    }
}
