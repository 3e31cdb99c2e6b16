//! Draft/published status tracking per content item
//!
//! Each of the three content collections (journal, food, books) carries one
//! `PublicationMetadata` record per active item id. The list-rendering UI
//! filters on the resolved status; draft items stay off the public pages.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether an item is visible on the public-facing pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Published,
}

/// Status plus last-touched timestamp for one content item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicationMetadata {
    pub status: PublicationStatus,
    pub updated_at: String,
}

impl PublicationMetadata {
    pub fn now(status: PublicationStatus) -> Self {
        Self {
            status,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The three content collections tracked by the publication store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Journal,
    Food,
    Books,
}

/// Per-collection maps from item id to publication metadata.
///
/// BTreeMap keeps the serialized blob stable across writes, so the backup
/// rotation's payload-diff check is not defeated by key ordering.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct PublicationState {
    #[serde(default)]
    pub journal: BTreeMap<String, PublicationMetadata>,
    #[serde(default)]
    pub food: BTreeMap<String, PublicationMetadata>,
    #[serde(default)]
    pub books: BTreeMap<String, PublicationMetadata>,
}

impl PublicationState {
    pub fn collection(&self, collection: Collection) -> &BTreeMap<String, PublicationMetadata> {
        match collection {
            Collection::Journal => &self.journal,
            Collection::Food => &self.food,
            Collection::Books => &self.books,
        }
    }

    pub fn collection_mut(
        &mut self,
        collection: Collection,
    ) -> &mut BTreeMap<String, PublicationMetadata> {
        match collection {
            Collection::Journal => &mut self.journal,
            Collection::Food => &mut self.food,
            Collection::Books => &mut self.books,
        }
    }
}
