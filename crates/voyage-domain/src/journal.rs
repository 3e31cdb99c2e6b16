//! Journal entry domain model

use serde::{Deserialize, Serialize};

/// One day of the trip, as authored in the journal editor.
///
/// Entries are uniquely keyed by `day` within a journal. The `location`
/// field holds the raw comma/semicolon-delimited place text exactly as the
/// author typed it; the geocoding pipeline parses it, the entry itself is
/// never rewritten.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub day: u32,
    pub date: String,
    pub title: String,
    pub location: String,
    pub story: String,
    pub mood: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub media_asset_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl JournalEntry {
    /// Create an entry with the required fields; media lists start empty.
    pub fn new(day: u32, date: &str, title: &str, location: &str) -> Self {
        Self {
            day,
            date: date.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            story: String::new(),
            mood: String::new(),
            photos: Vec::new(),
            media_asset_ids: Vec::new(),
            link: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_round_trip() {
        let entry = JournalEntry {
            story: "Première journée à Amman.".to_string(),
            mood: "émerveillé".to_string(),
            photos: vec!["amman-1.jpg".to_string()],
            ..JournalEntry::new(1, "2024-04-02", "Arrivée", "Amman")
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: JournalEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn test_camel_case_field_names() {
        let entry = JournalEntry {
            media_asset_ids: vec!["asset-1".to_string()],
            ..JournalEntry::new(3, "2024-04-04", "Jerash", "Jerash, Ajloun")
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"mediaAssetIds\""));
        assert!(!json.contains("media_asset_ids"));
    }

    #[test]
    fn test_optional_fields_absent_from_json() {
        let json = serde_json::to_string(&JournalEntry::new(1, "2024-04-02", "t", "Amman")).unwrap();
        assert!(!json.contains("photos"));
        assert!(!json.contains("link"));
    }
}
