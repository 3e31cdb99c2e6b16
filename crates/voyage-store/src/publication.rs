//! Draft/published state reconciliation and persistence
//!
//! The reconciliation functions are pure value-to-value transforms over
//! `PublicationState`. They return `Cow::Borrowed` when nothing changed,
//! which is the cheap dirty-check callers use to skip redundant writes.

use crate::client::{CollectionStore, StoreError, WriteReceipt};
use crate::engine::StorageEngine;
use std::borrow::Cow;
use std::collections::BTreeSet;
use std::sync::Arc;
use voyage_domain::{Collection, PublicationMetadata, PublicationState, PublicationStatus};

/// Bring one collection's tracked ids in line with the active item set.
///
/// Untracked active ids are inserted — `Published` when canonical (built-in
/// seed content), `Draft` when user-added — and tracked ids that left the
/// active set are pruned. Existing records keep their status and timestamp.
pub fn ensure_entries<'a>(
    state: &'a PublicationState,
    collection: Collection,
    active_ids: &[String],
    canonical_ids: &[String],
) -> Cow<'a, PublicationState> {
    let tracked = state.collection(collection);
    let active: BTreeSet<&str> = active_ids.iter().map(String::as_str).collect();

    let missing: Vec<&str> = active
        .iter()
        .filter(|id| !tracked.contains_key(**id))
        .copied()
        .collect();
    let stale: Vec<String> = tracked
        .keys()
        .filter(|id| !active.contains(id.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() && stale.is_empty() {
        return Cow::Borrowed(state);
    }

    let mut next = state.clone();
    let entries = next.collection_mut(collection);
    for id in stale {
        entries.remove(&id);
    }
    for id in missing {
        let status = if canonical_ids.iter().any(|c| c.as_str() == id) {
            PublicationStatus::Published
        } else {
            PublicationStatus::Draft
        };
        entries.insert(id.to_string(), PublicationMetadata::now(status));
    }
    Cow::Owned(next)
}

/// Set an item's status, refreshing its timestamp. No-op when the status
/// already matches or the id is untracked.
pub fn update_status<'a>(
    state: &'a PublicationState,
    collection: Collection,
    id: &str,
    status: PublicationStatus,
) -> Cow<'a, PublicationState> {
    match state.collection(collection).get(id) {
        Some(existing) if existing.status != status => {
            let mut next = state.clone();
            next.collection_mut(collection)
                .insert(id.to_string(), PublicationMetadata::now(status));
            Cow::Owned(next)
        }
        _ => Cow::Borrowed(state),
    }
}

/// Drop an item's record entirely. No-op when untracked.
pub fn remove_entry<'a>(
    state: &'a PublicationState,
    collection: Collection,
    id: &str,
) -> Cow<'a, PublicationState> {
    if !state.collection(collection).contains_key(id) {
        return Cow::Borrowed(state);
    }
    let mut next = state.clone();
    next.collection_mut(collection).remove(id);
    Cow::Owned(next)
}

/// The status a list page should apply for an item, falling back to
/// `default` for ids reconciliation has not seen yet.
pub fn resolve_status(
    state: &PublicationState,
    collection: Collection,
    id: &str,
    default: PublicationStatus,
) -> PublicationStatus {
    state
        .collection(collection)
        .get(id)
        .map(|m| m.status)
        .unwrap_or(default)
}

pub fn count_by_status(
    state: &PublicationState,
    collection: Collection,
    status: PublicationStatus,
) -> usize {
    state
        .collection(collection)
        .values()
        .filter(|m| m.status == status)
        .count()
}

/// Persistence for the whole state as one JSON blob.
pub struct PublicationStore<E> {
    store: CollectionStore<E>,
}

const PUBLICATION_KEY: &str = "voyage_publication_state";
const PUBLICATION_VERSION: &str = "1";

impl<E: StorageEngine> PublicationStore<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            store: CollectionStore::new(engine, PUBLICATION_KEY, PUBLICATION_VERSION),
        }
    }

    /// Missing or malformed persisted state degrades to the empty default;
    /// the status maps are reconstructible from the item sets.
    pub fn load(&self) -> PublicationState {
        self.store.read().unwrap_or_default()
    }

    pub fn save(&self, state: &PublicationState) -> Result<WriteReceipt, StoreError> {
        self.store.write(state)
    }
}
