//! Per-point event log and on-field lines.
//!
//! A `Point` is one possession-to-score cycle: the ordered events recorded
//! during it plus the two lines that played it. Uses `im::Vector` for the
//! event list so whole-game snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::event::{Event, EventKind};

/// The players one team fields for a single point.
///
/// League lines are 6-8 players, so they fit inline.
pub type Line = SmallVec<[String; 8]>;

/// One point: ordered events plus the offense and defense lines.
///
/// The lines are snapshots taken when the point starts; substitutions take
/// effect on the next point. Disjointness and line size are the caller's
/// responsibility.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Point {
    offense_players: Line,
    defense_players: Line,
    events: Vector<Event>,
}

impl Point {
    /// Create a point with the given lines and no events.
    #[must_use]
    pub fn new(offense_players: Line, defense_players: Line) -> Self {
        Self {
            offense_players,
            defense_players,
            events: Vector::new(),
        }
    }

    /// Append an event.
    pub fn add_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Remove and return the most recent event, if any.
    pub fn remove_last_event(&mut self) -> Option<Event> {
        self.events.pop_back()
    }

    /// The kind of the most recent event, if any.
    #[must_use]
    pub fn last_event_kind(&self) -> Option<EventKind> {
        self.events.last().map(|event| event.kind)
    }

    /// Swap the offense and defense lines.
    ///
    /// The pull is thrown by the team that is actually on defense, so the
    /// point starts with the lines reversed and is corrected here.
    pub fn swap_offense_and_defense(&mut self) {
        std::mem::swap(&mut self.offense_players, &mut self.defense_players);
    }

    /// Number of recorded events.
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// The recorded events, oldest first.
    #[must_use]
    pub fn events(&self) -> &Vector<Event> {
        &self.events
    }

    /// The offense line.
    #[must_use]
    pub fn offense_players(&self) -> &Line {
        &self.offense_players
    }

    /// The defense line.
    #[must_use]
    pub fn defense_players(&self) -> &Line {
        &self.defense_players
    }

    /// Human-readable line per event, oldest first.
    pub fn pretty_print(&self) -> impl Iterator<Item = String> + '_ {
        self.events.iter().map(Event::to_string)
    }
}
