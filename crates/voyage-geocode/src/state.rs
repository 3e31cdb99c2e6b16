//! Map content lifecycle state machine
//!
//! Replaces the stringly-typed status the UI used to juggle with an explicit
//! transition table. Anything outside the table is a rejected transition.

use thiserror::Error;

/// Where the map content stands between runs and validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapContentState {
    /// Nothing running, nothing pending.
    Idle,
    /// A geocoding run is in flight.
    Geocoding,
    /// The run finished with locations awaiting human validation.
    AwaitingValidation,
    /// Validated locations are on the map.
    Ready,
    /// The run failed or was cancelled.
    Error,
}

/// Events the UI feeds the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapContentEvent {
    /// A geocoding run started.
    Start,
    /// The run finished; `pending` locations await validation.
    Finished { pending: usize },
    /// The user accepted the pending locations.
    Validate,
    /// Cancellation or any fault, from any state.
    Fault,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid transition: {from:?} on {event:?}")]
pub struct TransitionError {
    pub from: MapContentState,
    pub event: MapContentEvent,
}

impl MapContentState {
    /// Apply one event, rejecting anything outside the transition table.
    pub fn apply(self, event: MapContentEvent) -> Result<MapContentState, TransitionError> {
        use MapContentEvent::*;
        use MapContentState::*;

        match (self, event) {
            (Idle, Start) => Ok(Geocoding),
            (Geocoding, Finished { pending: 0 }) => Ok(Ready),
            (Geocoding, Finished { .. }) => Ok(AwaitingValidation),
            (AwaitingValidation, Validate) => Ok(Ready),
            (_, Fault) => Ok(Error),
            (from, event) => Err(TransitionError { from, event }),
        }
    }
}
