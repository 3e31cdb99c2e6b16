//! Drives parsing → classification → geocoding across a full journal

use crate::classify::classify_locations;
use crate::mapbox::RemoteGeocoder;
use crate::parse::parse_location_string;
use crate::service::GeocodingService;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use voyage_domain::{FailedLocation, GeocodeFailure, JournalEntry, MapLocation, ParsedLocation};

/// Cooperative cancellation for a geocoding run, checked before each
/// attempt. Cloneable so the UI side keeps one handle while the run owns
/// another.
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Everything a geocoding run produced. Successes and failures are tracked
/// side by side; a failed place is reviewable, never silently dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeocodeRun {
    pub locations: Vec<MapLocation>,
    pub failures: Vec<FailedLocation>,
    /// Attempts actually made; less than the token total when cancelled.
    pub processed: usize,
    pub cancelled: bool,
}

/// Geocode every location mentioned across `entries`.
///
/// Locations are resolved strictly sequentially: this bounds the outbound
/// request rate and gives the progress callback one `(processed, total)`
/// notification per attempt, strictly increasing, never skipped. Result
/// order follows entry order, and within a day token order (secondaires
/// before the principal). Empty input returns an empty run without
/// invoking the callback.
pub async fn geocode_journal_entries<R: RemoteGeocoder>(
    entries: &[JournalEntry],
    service: &mut GeocodingService<R>,
    mut on_progress: Option<&mut dyn FnMut(usize, usize)>,
    cancel: &CancelFlag,
) -> GeocodeRun {
    if entries.is_empty() {
        return GeocodeRun::default();
    }

    let parsed: Vec<ParsedLocation> = entries
        .iter()
        .map(|entry| ParsedLocation {
            original: entry.location.clone(),
            parsed: parse_location_string(&entry.location),
            day: entry.day,
        })
        .collect();

    let total: usize = parsed.iter().map(|p| p.parsed.len()).sum();
    let mut run = GeocodeRun::default();

    for entry in &parsed {
        for classified in classify_locations(&entry.parsed, entry.day) {
            if cancel.is_cancelled() {
                run.cancelled = true;
                tracing::info!(processed = run.processed, total, "geocoding run cancelled");
                return run;
            }

            match service.geocode(&classified.name).await {
                Ok(Some(result)) => {
                    run.locations.push(MapLocation::from_classified(
                        &classified,
                        result.coordinates,
                        result.confidence,
                    ));
                }
                Ok(None) => {
                    run.failures.push(FailedLocation {
                        name: classified.name.clone(),
                        day: classified.day,
                        reason: GeocodeFailure::NotFound,
                    });
                }
                Err(reason) => {
                    run.failures.push(FailedLocation {
                        name: classified.name.clone(),
                        day: classified.day,
                        reason,
                    });
                }
            }

            run.processed += 1;
            if let Some(progress) = on_progress.as_deref_mut() {
                progress(run.processed, total);
            }
        }
    }

    run
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_domain::LocationRole;

    fn entry(day: u32, location: &str) -> JournalEntry {
        JournalEntry::new(day, "2024-04-02", "titre", location)
    }

    #[tokio::test]
    async fn test_empty_entries_empty_run_no_progress() {
        let mut service = GeocodingService::new(None);
        let mut calls = 0usize;
        let mut progress = |_: usize, _: usize| calls += 1;
        let run = geocode_journal_entries(&[], &mut service, Some(&mut progress), &CancelFlag::new())
            .await;
        assert_eq!(run, GeocodeRun::default());
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn test_order_and_progress_over_gazetteer() {
        let entries = vec![entry(1, "Amman"), entry(2, "Jerash, Ajloun, Amman")];
        let mut service = GeocodingService::new(None);
        let mut seen: Vec<(usize, usize)> = Vec::new();
        let mut progress = |current: usize, total: usize| seen.push((current, total));

        let run = geocode_journal_entries(
            &entries,
            &mut service,
            Some(&mut progress),
            &CancelFlag::new(),
        )
        .await;

        let expect: Vec<(&str, u32, LocationRole)> = vec![
            ("Amman", 1, LocationRole::Principal),
            ("Jerash", 2, LocationRole::Secondaire),
            ("Ajloun", 2, LocationRole::Secondaire),
            ("Amman", 2, LocationRole::Principal),
        ];
        let got: Vec<(&str, u32, LocationRole)> = run
            .locations
            .iter()
            .map(|l| (l.name.as_str(), l.day, l.role))
            .collect();
        assert_eq!(got, expect);
        assert!(run.failures.is_empty());
        assert_eq!(seen, vec![(1, 4), (2, 4), (3, 4), (4, 4)]);
    }

    #[tokio::test]
    async fn test_failures_tracked_with_reason() {
        let entries = vec![entry(1, "Amman, Atlantis")];
        let mut service = GeocodingService::new(None);
        let run =
            geocode_journal_entries(&entries, &mut service, None, &CancelFlag::new()).await;
        assert_eq!(run.locations.len(), 1);
        assert_eq!(run.failures.len(), 1);
        assert_eq!(run.failures[0].name, "Atlantis");
        assert_eq!(run.failures[0].reason, GeocodeFailure::NotFound);
        assert_eq!(run.processed, 2);
    }

    #[tokio::test]
    async fn test_cancel_before_start_returns_empty_partial() {
        let entries = vec![entry(1, "Amman, Jerash")];
        let mut service = GeocodingService::new(None);
        let cancel = CancelFlag::new();
        cancel.cancel();
        let run = geocode_journal_entries(&entries, &mut service, None, &cancel).await;
        assert!(run.cancelled);
        assert_eq!(run.processed, 0);
        assert!(run.locations.is_empty());
    }

    #[tokio::test]
    async fn test_cancel_mid_run_keeps_accumulated_results() {
        let entries = vec![entry(1, "Amman, Jerash, Petra")];
        let mut service = GeocodingService::new(None);
        let cancel = CancelFlag::new();
        let canceller = cancel.clone();
        let mut progress = move |current: usize, _total: usize| {
            if current == 2 {
                canceller.cancel();
            }
        };
        let run =
            geocode_journal_entries(&entries, &mut service, Some(&mut progress), &cancel).await;
        assert!(run.cancelled);
        assert_eq!(run.processed, 2);
        assert_eq!(run.locations.len(), 2);
    }
}
