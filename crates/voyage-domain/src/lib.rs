//! Domain types shared between the voyage geocoding pipeline and content store
//!
//! This crate provides the canonical data model for the travel journal:
//! - JournalEntry: one day of the trip (raw location text included)
//! - MediaAsset: an uploaded photo or document payload
//! - ParsedLocation / ClassifiedLocation / MapLocation / FailedLocation:
//!   the stages a location string goes through during geocoding
//! - PublicationState: draft/published metadata per content collection

pub mod journal;
pub mod location;
pub mod media;
pub mod publication;

pub use journal::*;
pub use location::*;
pub use media::*;
pub use publication::*;
