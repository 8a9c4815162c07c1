//! Derived game state: which actions are legal at this instant.
//!
//! The state is never stored; it is recomputed from the bookkeeper's data
//! on every query. Callers gate their action buttons on it; the record
//! operations themselves do not validate.

use crate::core::EventKind;

/// The UI-facing state of the game, derived from the current data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// No active point, or a half-opening point with nothing known yet.
    /// Only player selection (first actor) is legal.
    Start,
    /// A half-opening point with a known puller: ready to record the pull.
    Pull,
    /// A possession just ended and nobody has picked up the disc yet.
    WhoPickedUpDisc,
    /// The disc is live after a pull (or a point's first pickup) but no
    /// pass has happened: only a pass or a throwaway is legal.
    FirstThrowQuebecVariant,
    /// A defender has picked up right after a throwaway: the block/catch
    /// block choices are still open, scoring is not yet legal.
    FirstD,
    /// Offense resumed after a block or a drop: scoring is legal again.
    SecondD,
    /// Steady-state offense.
    Normal,
}

/// Inputs the state derivation depends on. Collected by the bookkeeper,
/// matched against the rule table below.
#[derive(Clone, Copy, Debug)]
pub(crate) struct DerivationKey {
    pub has_active_point: bool,
    pub first_point_of_half: bool,
    pub no_events: bool,
    pub last_event: Option<EventKind>,
    pub has_actor: bool,
}

impl GameState {
    /// Ordered rule table; the first matching arm wins, so arm order
    /// encodes the tie-break policy.
    pub(crate) fn derive(key: &DerivationKey) -> Self {
        use EventKind::{Defense, Drop, Pull, Throwaway};

        match (
            key.has_active_point,
            key.first_point_of_half,
            key.no_events,
            key.last_event,
            key.has_actor,
        ) {
            (false, ..) => GameState::Start,
            (true, true, true, _, false) => GameState::Start,
            (true, true, true, _, true) => GameState::Pull,
            (true, _, _, Some(Pull), false) => GameState::WhoPickedUpDisc,
            (true, _, _, Some(Pull), true) => GameState::FirstThrowQuebecVariant,
            (true, _, true, _, false) => GameState::WhoPickedUpDisc,
            (true, _, true, _, true) => GameState::FirstThrowQuebecVariant,
            (true, _, _, Some(Throwaway), true) => GameState::FirstD,
            (true, _, _, Some(Defense), false) => GameState::WhoPickedUpDisc,
            (true, _, _, Some(Defense), true) => GameState::SecondD,
            (true, _, _, Some(Throwaway), false) => GameState::WhoPickedUpDisc,
            (true, _, _, Some(Drop), false) => GameState::WhoPickedUpDisc,
            (true, _, _, Some(Drop), true) => GameState::SecondD,
            _ => GameState::Normal,
        }
    }
}
