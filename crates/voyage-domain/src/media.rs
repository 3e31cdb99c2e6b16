//! Media asset domain model

use serde::{Deserialize, Serialize};

/// An uploaded photo or document, stored inline as a base64 payload.
///
/// Assets are referenced from journal entries by id. They tend to dominate
/// storage usage, so quota-exceeded write failures usually point here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAsset {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub data: String,
    pub created_at: String,
}

impl MediaAsset {
    pub fn new(file_name: &str, mime_type: &str, data: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            data,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Approximate storage footprint of the encoded payload.
    pub fn payload_bytes(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id_and_timestamp() {
        let asset = MediaAsset::new("petra.jpg", "image/jpeg", "aGVsbG8=".to_string());
        assert!(!asset.id.is_empty());
        assert!(asset.created_at.contains('T'));
        assert_eq!(asset.payload_bytes(), 8);
    }
}
