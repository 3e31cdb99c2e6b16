//! String key-value storage backends

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// The write would push the engine past its capacity. Reported
    /// distinctly so callers can prompt for cleanup instead of showing a
    /// generic failure.
    #[error("Storage quota exceeded writing {attempted} bytes")]
    QuotaExceeded { attempted: usize },
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// The backends all collections share. Methods take `&self`; engines handle
/// their own interior mutability, so several `CollectionStore`s can sit on
/// one engine.
pub trait StorageEngine {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), EngineError>;
    fn remove(&self, key: &str);
    fn keys(&self) -> Vec<String>;
}

/// HashMap-backed engine with an optional total-byte quota, mirroring the
/// size-limited storage the journal originally lived in. The default for
/// tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryEngine {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes held across keys and values.
    pub fn used_bytes(&self) -> usize {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageEngine for MemoryEngine {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EngineError> {
        let mut entries = self.entries.lock().unwrap();
        if let Some(quota) = self.quota_bytes {
            let existing = entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let used: usize = entries.iter().map(|(k, v)| k.len() + v.len()).sum();
            let attempted = key.len() + value.len();
            if used - existing + attempted > quota {
                return Err(EngineError::QuotaExceeded { attempted });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }

    fn keys(&self) -> Vec<String> {
        self.entries.lock().unwrap().keys().cloned().collect()
    }
}

/// One file per key under a root directory, so journal state survives
/// across native sessions. Keys follow the collection key scheme
/// (`[a-z0-9_]`), safe as file names.
#[derive(Debug)]
pub struct FileEngine {
    root: PathBuf,
}

impl FileEngine {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, EngineError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| EngineError::Backend(e.to_string()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageEngine for FileEngine {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EngineError> {
        fs::write(self.path_for(key), value).map_err(|e| {
            // Disk-full maps to the quota signature
            if e.raw_os_error() == Some(28) {
                EngineError::QuotaExceeded {
                    attempted: value.len(),
                }
            } else {
                EngineError::Backend(e.to_string())
            }
        })
    }

    fn remove(&self, key: &str) {
        let _ = fs::remove_file(self.path_for(key));
    }

    fn keys(&self) -> Vec<String> {
        let Ok(dir) = fs::read_dir(&self.root) else {
            return Vec::new();
        };
        dir.filter_map(|entry| {
            let name = entry.ok()?.file_name().into_string().ok()?;
            name.strip_suffix(".json").map(str::to_string)
        })
        .collect()
    }
}
