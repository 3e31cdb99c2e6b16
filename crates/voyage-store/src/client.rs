//! Generic collection store with backup rotation and version markers
//!
//! One implementation serves every persisted collection (journal entries,
//! media assets, validated places, publication state). Each collection
//! occupies four engine keys: `{key}`, `{key}_backup`, `{key}_backup2`,
//! `{key}_version`.

use crate::engine::{EngineError, StorageEngine};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The payload did not fit; callers should offer cleanup (large media
    /// assets are the usual culprit) rather than a generic failure message.
    #[error("Collection '{collection}' over storage quota ({attempted} bytes)")]
    QuotaExceeded { collection: String, attempted: usize },
    #[error("Serialization failed for '{collection}': {message}")]
    Serialization { collection: String, message: String },
    #[error("Storage backend failed for '{collection}': {message}")]
    Backend { collection: String, message: String },
}

/// The two shadow-copy generations kept per collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackupSlot {
    Primary,
    Secondary,
}

/// Raw view of all four slots of a collection, for recovery and
/// diagnostics.
#[derive(Clone, Debug, PartialEq)]
pub struct StorageSnapshot {
    pub main: Option<String>,
    pub backup: Option<String>,
    pub backup2: Option<String>,
    pub version: Option<String>,
}

/// Outcome of a successful write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteReceipt {
    pub bytes: usize,
    /// Whether the payload differed from the stored one and backups were
    /// rotated before the overwrite.
    pub rotated: bool,
}

/// JSON collection store over a shared engine.
pub struct CollectionStore<E> {
    engine: Arc<E>,
    key: String,
    version: String,
}

impl<E: StorageEngine> CollectionStore<E> {
    /// `version` is the schema marker stamped alongside every write.
    pub fn new(engine: Arc<E>, key: &str, version: &str) -> Self {
        Self {
            engine,
            key: key.to_string(),
            version: version.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn backup_key(&self, slot: BackupSlot) -> String {
        match slot {
            BackupSlot::Primary => format!("{}_backup", self.key),
            BackupSlot::Secondary => format!("{}_backup2", self.key),
        }
    }

    fn version_key(&self) -> String {
        format!("{}_version", self.key)
    }

    /// Parse the main slot. A malformed payload is logged and read as
    /// `None`; the caller decides whether to walk the backup chain.
    pub fn read<T: DeserializeOwned>(&self) -> Option<T> {
        let raw = self.read_raw()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(error) => {
                tracing::warn!(collection = %self.key, %error, "stored payload is unparsable");
                None
            }
        }
    }

    pub fn read_raw(&self) -> Option<String> {
        self.engine.get(&self.key)
    }

    pub fn write<T: Serialize>(&self, value: &T) -> Result<WriteReceipt, StoreError> {
        let payload = serde_json::to_string(value).map_err(|e| StoreError::Serialization {
            collection: self.key.clone(),
            message: e.to_string(),
        })?;
        self.write_raw(&payload)
    }

    /// Write the payload, rotating backups first when it differs from what
    /// is stored: primary backup shifts to secondary, current main becomes
    /// primary. Identical payloads overwrite in place so repeated saves
    /// don't wash out both generations.
    pub fn write_raw(&self, payload: &str) -> Result<WriteReceipt, StoreError> {
        let current = self.engine.get(&self.key);
        let differs = current.as_deref() != Some(payload);
        let mut rotated = false;

        if differs {
            if let Some(primary) = self.engine.get(&self.backup_key(BackupSlot::Primary)) {
                self.set(&self.backup_key(BackupSlot::Secondary), &primary)?;
            }
            if let Some(main) = current {
                self.set(&self.backup_key(BackupSlot::Primary), &main)?;
                rotated = true;
            }
        }

        self.set(&self.key, payload)?;
        self.set(&self.version_key(), &self.version)?;

        Ok(WriteReceipt {
            bytes: payload.len(),
            rotated,
        })
    }

    pub fn backup(&self, slot: BackupSlot) -> Option<String> {
        self.engine.get(&self.backup_key(slot))
    }

    /// Copy a backup slot back over main, durably, and return its parsed
    /// contents. An empty or unparsable slot restores nothing and leaves
    /// main untouched.
    pub fn restore_from_backup<T: DeserializeOwned>(
        &self,
        slot: BackupSlot,
    ) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backup(slot) else {
            return Ok(None);
        };
        let value: T = match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(collection = %self.key, ?slot, %error, "backup slot is unparsable");
                return Ok(None);
            }
        };
        self.set(&self.key, &raw)?;
        self.set(&self.version_key(), &self.version)?;
        Ok(Some(value))
    }

    pub fn snapshot(&self) -> StorageSnapshot {
        StorageSnapshot {
            main: self.read_raw(),
            backup: self.backup(BackupSlot::Primary),
            backup2: self.backup(BackupSlot::Secondary),
            version: self.version(),
        }
    }

    /// Drop all four slots.
    pub fn clear(&self) {
        self.engine.remove(&self.key);
        self.engine.remove(&self.backup_key(BackupSlot::Primary));
        self.engine.remove(&self.backup_key(BackupSlot::Secondary));
        self.engine.remove(&self.version_key());
    }

    pub fn version(&self) -> Option<String> {
        self.engine.get(&self.version_key())
    }

    pub fn set_version(&self, version: &str) -> Result<(), StoreError> {
        self.set(&self.version_key(), version)
    }

    pub fn clear_version(&self) {
        self.engine.remove(&self.version_key());
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.engine.set(key, value).map_err(|e| match e {
            EngineError::QuotaExceeded { attempted } => StoreError::QuotaExceeded {
                collection: self.key.clone(),
                attempted,
            },
            EngineError::Backend(message) => StoreError::Backend {
                collection: self.key.clone(),
                message,
            },
        })
    }
}
