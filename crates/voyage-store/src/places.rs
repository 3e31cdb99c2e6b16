//! Validated map location repository
//!
//! The only durable output of a geocoding run. Pending locations live in UI
//! state until the user validates them; this repository persists the
//! validated list the map renders from.

use crate::client::{CollectionStore, StorageSnapshot, StoreError, WriteReceipt};
use crate::engine::StorageEngine;
use std::sync::Arc;
use voyage_domain::MapLocation;

const PLACES_KEY: &str = "voyage_map_places";
const PLACES_VERSION: &str = "1";

pub struct PlaceRepository<E> {
    store: CollectionStore<E>,
}

impl<E: StorageEngine> PlaceRepository<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            store: CollectionStore::new(engine, PLACES_KEY, PLACES_VERSION),
        }
    }

    pub fn load(&self) -> Vec<MapLocation> {
        self.store.read().unwrap_or_default()
    }

    /// Persist a validated run. Order matters: the list keeps entry-day
    /// order with secondaires ahead of each day's principal.
    pub fn save(&self, locations: &[MapLocation]) -> Result<WriteReceipt, StoreError> {
        self.store.write(&locations)
    }

    pub fn snapshot(&self) -> StorageSnapshot {
        self.store.snapshot()
    }

    pub fn clear(&self) {
        self.store.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;
    use voyage_domain::LocationRole;

    #[test]
    fn test_round_trip_preserves_order() {
        let repository = PlaceRepository::new(Arc::new(MemoryEngine::new()));
        let locations = vec![
            MapLocation {
                name: "Jerash".to_string(),
                role: LocationRole::Secondaire,
                day: 2,
                coordinates: [35.8998, 32.2811],
                confidence: 0.9,
            },
            MapLocation {
                name: "Amman".to_string(),
                role: LocationRole::Principal,
                day: 2,
                coordinates: [35.9106, 31.9539],
                confidence: 1.0,
            },
        ];
        repository.save(&locations).unwrap();
        assert_eq!(repository.load(), locations);
    }

    #[test]
    fn test_missing_list_reads_empty() {
        let repository = PlaceRepository::new(Arc::new(MemoryEngine::new()));
        assert!(repository.load().is_empty());
    }
}
