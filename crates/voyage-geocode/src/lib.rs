//! voyage-geocode: the location geocoding pipeline
//!
//! This crate turns raw location strings from journal entries into
//! map-ready coordinates:
//! - Parsing: split free text into place-name tokens, normalizing French
//!   geographic idioms ("à Jerash", "secteur de Dana")
//! - Classification: the last place of a day is its principal destination,
//!   everything before it a secondary waypoint
//! - Geocoding: in-memory cache → static Jordan gazetteer → Mapbox
//!   Geocoding API, short-circuiting on first hit
//! - Orchestration: sequential drive across a full journal with progress
//!   reporting, cancellation, and explicit failure tracking

pub mod cache;
pub mod classify;
pub mod gazetteer;
pub mod http;
pub mod mapbox;
pub mod orchestrator;
pub mod parse;
pub mod service;
pub mod state;

pub use cache::GeocodeCache;
pub use classify::classify_locations;
pub use gazetteer::Gazetteer;
pub use mapbox::{MapboxSource, RemoteGeocoder, RemoteHit, SourceError};
pub use orchestrator::{geocode_journal_entries, CancelFlag, GeocodeRun};
pub use parse::parse_location_string;
pub use service::GeocodingService;
pub use state::{MapContentEvent, MapContentState, TransitionError};
