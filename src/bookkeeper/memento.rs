//! Undo records: data-only reversal entries for the bookkeeper.
//!
//! Every mutating operation pushes exactly one `Memento` capturing the
//! prior values it is about to overwrite. `Bookkeeper::undo` pops the most
//! recent record and applies its inverse. The records hold data, never
//! behavior, so the stack is inspectable and testable in isolation.

use crate::core::Line;

use super::Bookkeeper;

/// One reversal record. Variants correspond one-to-one with the record
/// operations that push them.
#[derive(Clone, Debug)]
pub(crate) enum Memento {
    /// Reverses `record_first_actor`.
    FirstActor { saved_first_actor: Option<String> },
    /// Reverses `record_pull`.
    Pull { saved_first_actor: Option<String> },
    /// Reverses `record_pass` and `record_d`.
    LastEvent { saved_first_actor: Option<String> },
    /// Reverses `record_throw_away` and `record_drop`.
    Turnover { saved_first_actor: Option<String> },
    /// Reverses `record_catch_d`. The cursor was left untouched, so only
    /// the event comes back out.
    CatchDefense,
    /// Reverses `record_point`.
    Score {
        saved_first_actor: Option<String>,
        saved_home_players: Line,
        saved_away_players: Line,
    },
    /// Reverses `record_half`.
    Half,
}

impl Memento {
    /// Apply the inverse mutation to the bookkeeper.
    pub(crate) fn apply(self, book: &mut Bookkeeper) {
        match self {
            Memento::FirstActor { saved_first_actor } => {
                book.first_actor = saved_first_actor;
                // A point with no events yet was created by the operation
                // being undone: discard it and give possession back.
                if book
                    .active_point
                    .as_ref()
                    .is_some_and(|point| point.event_count() == 0)
                {
                    book.active_point = None;
                    book.change_possession();
                }
            }
            Memento::Pull { saved_first_actor } => {
                if let Some(point) = book.active_point.as_mut() {
                    point.swap_offense_and_defense();
                    point.remove_last_event();
                }
                book.change_possession();
                book.first_actor = saved_first_actor;
            }
            Memento::LastEvent { saved_first_actor } => {
                if let Some(point) = book.active_point.as_mut() {
                    point.remove_last_event();
                }
                book.first_actor = saved_first_actor;
            }
            Memento::Turnover { saved_first_actor } => {
                if let Some(point) = book.active_point.as_mut() {
                    point.remove_last_event();
                }
                book.first_actor = saved_first_actor;
                book.change_possession();
            }
            Memento::CatchDefense => {
                if let Some(point) = book.active_point.as_mut() {
                    point.remove_last_event();
                }
            }
            Memento::Score {
                saved_first_actor,
                saved_home_players,
                saved_away_players,
            } => {
                if book.home_possession {
                    book.home_score -= 1;
                } else {
                    book.away_score -= 1;
                }

                book.active_point = book.active_game.pop_point();
                if let Some(point) = book.active_point.as_mut() {
                    point.remove_last_event();
                }
                book.home_players = saved_home_players;
                book.away_players = saved_away_players;
                book.first_actor = saved_first_actor;
            }
            Memento::Half => {
                book.points_at_half = 0;
            }
        }
    }
}
