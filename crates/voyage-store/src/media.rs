//! Media asset repository

use crate::client::{CollectionStore, StorageSnapshot, StoreError, WriteReceipt};
use crate::engine::StorageEngine;
use std::sync::Arc;
use voyage_domain::MediaAsset;

const MEDIA_KEY: &str = "voyage_media_assets";
const MEDIA_VERSION: &str = "1";

/// Persisted media assets. The biggest payloads in the store live here, so
/// quota-exceeded write errors from this repository are the cue to offer
/// the user an asset cleanup.
pub struct MediaRepository<E> {
    store: CollectionStore<E>,
}

impl<E: StorageEngine> MediaRepository<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            store: CollectionStore::new(engine, MEDIA_KEY, MEDIA_VERSION),
        }
    }

    /// Missing or corrupt asset lists read as empty; assets are
    /// re-uploadable and not worth a recovery chain.
    pub fn load(&self) -> Vec<MediaAsset> {
        self.store.read().unwrap_or_default()
    }

    pub fn save(&self, assets: &[MediaAsset]) -> Result<WriteReceipt, StoreError> {
        self.store.write(&assets)
    }

    pub fn add(&self, asset: MediaAsset) -> Result<Vec<MediaAsset>, StoreError> {
        let mut assets = self.load();
        assets.push(asset);
        self.save(&assets)?;
        Ok(assets)
    }

    /// Remove by id; returns whether anything was deleted.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut assets = self.load();
        let before = assets.len();
        assets.retain(|a| a.id != id);
        if assets.len() == before {
            return Ok(false);
        }
        self.save(&assets)?;
        Ok(true)
    }

    pub fn snapshot(&self) -> StorageSnapshot {
        self.store.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::MemoryEngine;

    fn asset(name: &str) -> MediaAsset {
        MediaAsset::new(name, "image/jpeg", "aGVsbG8=".to_string())
    }

    #[test]
    fn test_add_and_remove() {
        let repository = MediaRepository::new(Arc::new(MemoryEngine::new()));
        let added = repository.add(asset("petra.jpg")).unwrap();
        assert_eq!(added.len(), 1);
        let id = added[0].id.clone();
        assert!(repository.remove(&id).unwrap());
        assert!(!repository.remove(&id).unwrap());
        assert!(repository.load().is_empty());
    }

    #[test]
    fn test_quota_error_reaches_caller() {
        let repository = MediaRepository::new(Arc::new(MemoryEngine::with_quota(32)));
        let big = MediaAsset::new("pano.jpg", "image/jpeg", "x".repeat(4096));
        match repository.add(big) {
            Err(StoreError::QuotaExceeded { .. }) => {}
            other => panic!("expected quota error, got {other:?}"),
        }
    }
}
