//! Principal/secondaire role assignment for a day's place tokens

use voyage_domain::{ClassifiedLocation, LocationRole};

/// Assign a role to each parsed token of one day.
///
/// The last-mentioned place in a day's entry is treated as the day's
/// destination and marked `Principal`; every token before it is a
/// `Secondaire` waypoint, in original order. Empty input yields empty
/// output.
pub fn classify_locations(tokens: &[String], day: u32) -> Vec<ClassifiedLocation> {
    let last = tokens.len().saturating_sub(1);
    tokens
        .iter()
        .enumerate()
        .map(|(i, name)| ClassifiedLocation {
            name: name.clone(),
            role: if i == last {
                LocationRole::Principal
            } else {
                LocationRole::Secondaire
            },
            day,
        })
        .collect()
}
