//! # ultibook
//!
//! Play-by-play scorekeeping engine for ultimate frisbee league games.
//!
//! ## Design Principles
//!
//! 1. **Pull-based UI contract**: callers report actions and re-query
//!    [`Bookkeeper::game_state`] to learn which actions are legal next.
//!    The core never pushes events at the UI.
//!
//! 2. **Everything undoes**: each record operation pushes one data-only
//!    reversal record; [`Bookkeeper::undo`] restores score, possession,
//!    rosters, and the event log with exact fidelity.
//!
//! 3. **Trusting operations**: preconditions are documented, not checked.
//!    The caller gates buttons on the derived state; the core stays total
//!    and simple.
//!
//! ## Architecture
//!
//! - **Persistent data structures**: point and event lists use `im`
//!   vectors, so the owned snapshot handed to the background autosave
//!   thread is an O(1) clone of the live game.
//!
//! - **Derived state**: the legal-action state is recomputed from data on
//!   every query via an ordered rule table; it is never stored.
//!
//! ## Modules
//!
//! - `core`: events, points, and the game log
//! - `bookkeeper`: the stateful scorekeeper and its undo stack
//! - `league`: roster and schedule documents supplied by the league server
//! - `snapshot`: the wire-format game snapshot
//! - `backup`: fire-and-forget crash-recovery writes

pub mod backup;
pub mod bookkeeper;
pub mod core;
pub mod league;
pub mod snapshot;

// Re-export commonly used types
pub use crate::backup::{Autosaver, BackupError};
pub use crate::bookkeeper::{Bookkeeper, GameState};
pub use crate::core::{Event, EventKind, Game, Line, Point};
pub use crate::league::{load_matchups, Gender, League, LoadError, Matchup, Team, Teams};
pub use crate::snapshot::GameSnapshot;
