//! Static Jordan gazetteer
//!
//! Lookup table for every place one itinerary through Jordan is likely to
//! mention, including French spellings, orthographic variants, and the
//! vague region phrases the parser canonicalizes. Coordinates are
//! `[longitude, latitude]` of a representative point.

use voyage_domain::LonLat;

/// Known place names, keyed by their lowercase-trimmed form.
const PLACES: &[(&str, LonLat)] = &[
    ("amman", [35.9106, 31.9539]),
    ("jerash", [35.8998, 32.2811]),
    ("ajloun", [35.7517, 32.3326]),
    ("ajlun", [35.7517, 32.3326]),
    ("umm qais", [35.6853, 32.6561]),
    ("irbid", [35.8575, 32.5556]),
    ("salt", [35.7273, 32.0392]),
    ("as-salt", [35.7273, 32.0392]),
    ("madaba", [35.7933, 31.7157]),
    ("mont nebo", [35.7253, 31.7683]),
    ("mount nebo", [35.7253, 31.7683]),
    ("mer morte", [35.5883, 31.5590]),
    ("dead sea", [35.5883, 31.5590]),
    ("béthanie", [35.6270, 31.8370]),
    ("kerak", [35.7047, 31.1810]),
    ("karak", [35.7047, 31.1810]),
    ("dana", [35.6144, 30.6776]),
    ("dana et environs", [35.6144, 30.6776]),
    ("région de dana", [35.6144, 30.6776]),
    ("feynan", [35.4906, 30.6290]),
    ("shobak", [35.5599, 30.5316]),
    ("petra", [35.4444, 30.3285]),
    ("little petra", [35.4366, 30.3688]),
    ("wadi musa", [35.4795, 30.3218]),
    ("wadi rum", [35.4194, 29.5766]),
    ("wadi ram", [35.4194, 29.5766]),
    ("aqaba", [35.0078, 29.5321]),
    ("azraq", [36.8258, 31.8340]),
];

/// Pure lookup table from normalized place names to coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Gazetteer;

impl Gazetteer {
    /// Comparison key shared with the geocode cache: lowercase, trimmed.
    pub fn normalize(name: &str) -> String {
        name.trim().to_lowercase()
    }

    pub fn lookup(&self, name: &str) -> Option<LonLat> {
        let key = Self::normalize(name);
        PLACES
            .iter()
            .find(|(known, _)| *known == key)
            .map(|(_, coords)| *coords)
    }
}
