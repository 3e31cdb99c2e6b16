//! Built-in seed itinerary
//!
//! The canonical entries ship with the application and are the recovery
//! floor: when the main slot and both backups are gone, the journal
//! repository falls back to these. Their ids default to `Published` during
//! publication reconciliation; user-added days default to `Draft`.

use voyage_domain::JournalEntry;

/// The built-in eight-day Jordan itinerary.
pub fn canonical_entries() -> Vec<JournalEntry> {
    vec![
        seed(1, "2024-04-02", "Arrivée à Amman", "Amman", "curieux"),
        seed(2, "2024-04-03", "Citadelle et théâtre romain", "Amman", "émerveillé"),
        seed(3, "2024-04-04", "Ruines du nord", "Jerash, Ajloun, Amman", "fasciné"),
        seed(4, "2024-04-05", "Mosaïques et mont Nebo", "Madaba, Mont Nebo, Mer Morte", "serein"),
        seed(5, "2024-04-06", "Descente vers Dana", "Kerak, Dana et environs", "contemplatif"),
        seed(6, "2024-04-07", "La cité nabatéenne", "Shobak, Petra", "ébloui"),
        seed(7, "2024-04-08", "Nuit dans le désert", "Wadi Rum", "minuscule"),
        seed(8, "2024-04-09", "La mer Rouge", "Aqaba", "reposé"),
    ]
}

/// Canonical day ids as publication-store keys.
pub fn canonical_day_ids() -> Vec<String> {
    canonical_entries()
        .iter()
        .map(|entry| entry.day.to_string())
        .collect()
}

fn seed(day: u32, date: &str, title: &str, location: &str, mood: &str) -> JournalEntry {
    JournalEntry {
        mood: mood.to_string(),
        ..JournalEntry::new(day, date, title, location)
    }
}
