//! The bookkeeper: the stateful scorekeeper for one game.
//!
//! ## Model
//!
//! Callers report discrete actions (pull, pass, throwaway, block, drop,
//! goal) with the acting player's identity. Each `record_*` operation
//! appends to the active point's event log, updates score and possession,
//! and pushes one reversal record onto the undo stack. The model is
//! pull-based: after every mutation the caller re-queries [`game_state`]
//! to decide which actions to offer next.
//!
//! ## Contract
//!
//! Operations trust the caller to have gated them on [`game_state`]; they
//! perform no validation of their own. Calling an operation out of state
//! may leave the data inconsistent. The exceptions: [`undo`] on an empty
//! stack is a safe no-op, and [`record_half`] is idempotent.
//!
//! [`game_state`]: Bookkeeper::game_state
//! [`undo`]: Bookkeeper::undo
//! [`record_half`]: Bookkeeper::record_half

mod memento;
mod state;

pub use state::GameState;

use log::{debug, info};
use rustc_hash::FxHashSet;
use std::path::PathBuf;

use crate::backup::Autosaver;
use crate::core::{Event, EventKind, Game, Line, Point};
use crate::league::Team;
use crate::snapshot::GameSnapshot;

use self::memento::Memento;
use self::state::DerivationKey;

/// Scorekeeper for a single game between two teams.
pub struct Bookkeeper {
    league_id: String,
    week: u32,

    /// Team fielding the left side of the scoreboard.
    pub home_team: Team,
    /// Team fielding the right side of the scoreboard.
    pub away_team: Team,

    home_players: Line,
    away_players: Line,

    active_game: Game,
    mementos: Vec<Memento>,

    active_point: Option<Point>,
    first_actor: Option<String>,

    /// Which team currently has offensive control.
    pub home_possession: bool,
    /// Completed points scored by the home team.
    pub home_score: i32,
    /// Completed points scored by the away team.
    pub away_score: i32,

    points_at_half: usize,

    home_participants: FxHashSet<String>,
    away_participants: FxHashSet<String>,

    autosave: Option<Autosaver>,
}

impl Bookkeeper {
    /// Start scorekeeping for a game.
    #[must_use]
    pub fn new(league_id: impl Into<String>, week: u32, home_team: Team, away_team: Team) -> Self {
        info!(
            "starting game: {} vs {} (week {})",
            home_team.name, away_team.name, week
        );

        Self {
            league_id: league_id.into(),
            week,
            home_team,
            away_team,
            home_players: Line::new(),
            away_players: Line::new(),
            active_game: Game::new(),
            mementos: Vec::new(),
            active_point: None,
            first_actor: None,
            home_possession: true,
            home_score: 0,
            away_score: 0,
            points_at_half: 0,
            home_participants: FxHashSet::default(),
            away_participants: FxHashSet::default(),
            autosave: None,
        }
    }

    /// Enable crash-recovery snapshots under `root` after every scored
    /// point.
    #[must_use]
    pub fn with_autosave(mut self, root: impl Into<PathBuf>) -> Self {
        self.autosave = Some(Autosaver::new(root.into()));
        self
    }

    // === Derived state ===

    /// Derive the current game state. Pure: recomputed on every call from
    /// the active point, the halftime snapshot, and the pending actor.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        GameState::derive(&DerivationKey {
            has_active_point: self.active_point.is_some(),
            first_point_of_half: self.active_game.point_count() == self.points_at_half,
            no_events: self
                .active_point
                .as_ref()
                .map_or(true, |point| point.event_count() == 0),
            last_event: self.active_point.as_ref().and_then(Point::last_event_kind),
            has_actor: self.first_actor.is_some(),
        })
    }

    /// True when a pending actor is known, i.e. the next player tap should
    /// record a pass rather than name who has the disc.
    #[must_use]
    pub fn should_record_new_pass(&self) -> bool {
        self.first_actor.is_some()
    }

    /// The player currently holding the disc, if known.
    #[must_use]
    pub fn first_actor(&self) -> Option<&str> {
        self.first_actor.as_deref()
    }

    /// The point currently being played, if any.
    #[must_use]
    pub fn active_point(&self) -> Option<&Point> {
        self.active_point.as_ref()
    }

    /// Completed points so far.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.active_game.point_count()
    }

    // === Record operations ===

    /// Replace the on-field lines. Called between points when substitutions
    /// come on; takes effect when the next point starts.
    pub fn record_active_players(&mut self, home_players: Line, away_players: Line) {
        self.home_players = home_players;
        self.away_players = away_players;
    }

    /// Name the player who has the disc, starting a new point if none is
    /// active. `is_home` says which side that player belongs to and, for a
    /// new point, which side starts with possession.
    pub fn record_first_actor(&mut self, player: impl Into<String>, is_home: bool) {
        self.mementos.push(Memento::FirstActor {
            saved_first_actor: self.first_actor.clone(),
        });

        if self.active_point.is_none() {
            self.start_point(is_home);
        }

        self.first_actor = Some(player.into());
    }

    fn start_point(&mut self, is_home: bool) {
        self.home_possession = is_home;

        let (offense_players, defense_players) = if is_home {
            (self.home_players.clone(), self.away_players.clone())
        } else {
            (self.away_players.clone(), self.home_players.clone())
        };

        self.active_point = Some(Point::new(offense_players, defense_players));
    }

    /// Record the pull that opens a half.
    ///
    /// The pulling team starts the point holding the disc yet on defense,
    /// so the point's lines are swapped and possession flips as the pull
    /// goes up.
    pub fn record_pull(&mut self) {
        self.mementos.push(Memento::Pull {
            saved_first_actor: self.first_actor.clone(),
        });

        if let Some(point) = self.active_point.as_mut() {
            point.swap_offense_and_defense();
        }
        self.change_possession();

        let puller = self.take_actor();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::new(EventKind::Pull, puller));
        }
    }

    /// Record a completed pass to `receiver`, who becomes the pending
    /// actor.
    pub fn record_pass(&mut self, receiver: impl Into<String>) {
        self.mementos.push(Memento::LastEvent {
            saved_first_actor: self.first_actor.clone(),
        });

        let receiver = receiver.into();
        let thrower = self.take_actor();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::pass(thrower, receiver.clone()));
        }
        self.first_actor = Some(receiver);
    }

    /// Record a throwaway by the pending actor. Possession flips.
    pub fn record_throw_away(&mut self) {
        self.mementos.push(Memento::Turnover {
            saved_first_actor: self.first_actor.clone(),
        });

        self.change_possession();
        let thrower = self.take_actor();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::new(EventKind::Throwaway, thrower));
        }
    }

    /// Record a dropped disc. Possession flips.
    pub fn record_drop(&mut self) {
        self.mementos.push(Memento::Turnover {
            saved_first_actor: self.first_actor.clone(),
        });

        self.change_possession();
        let receiver = self.take_actor();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::new(EventKind::Drop, receiver));
        }
    }

    /// Record a block by the pending actor. The disc is loose afterwards,
    /// so the cursor clears.
    pub fn record_d(&mut self) {
        self.mementos.push(Memento::LastEvent {
            saved_first_actor: self.first_actor.clone(),
        });

        let defender = self.take_actor();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::new(EventKind::Defense, defender));
        }
    }

    /// Record a catch block: the defender comes down with the disc, so the
    /// cursor stays on them.
    pub fn record_catch_d(&mut self) {
        self.mementos.push(Memento::CatchDefense);

        let defender = self.first_actor.clone().unwrap_or_default();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::new(EventKind::Defense, defender));
        }
    }

    /// Record the goal that ends the active point: the point moves into
    /// the game log, the possessing side's score increments, the lines
    /// merge into the season participant sets, and an autosave snapshot is
    /// written in the background (when configured).
    pub fn record_point(&mut self) {
        self.mementos.push(Memento::Score {
            saved_first_actor: self.first_actor.clone(),
            saved_home_players: self.home_players.clone(),
            saved_away_players: self.away_players.clone(),
        });

        let scorer = self.take_actor();
        if let Some(point) = self.active_point.as_mut() {
            point.add_event(Event::new(EventKind::Point, scorer));
        }
        if let Some(point) = self.active_point.take() {
            self.active_game.add_point(point);
        }

        if self.home_possession {
            self.home_score += 1;
        } else {
            self.away_score += 1;
        }

        self.home_participants
            .extend(self.home_players.iter().cloned());
        self.away_participants
            .extend(self.away_players.iter().cloned());

        self.home_players.clear();
        self.away_players.clear();

        debug!(
            "point recorded: {} {} - {} {}",
            self.home_team.name, self.home_score, self.away_team.name, self.away_score
        );

        if let Some(saver) = &self.autosave {
            // Fire and forget; the handle is dropped, failures are logged
            // by the writer thread.
            let _detached = saver.spawn(self.serialize());
        }
    }

    /// Mark halftime at the current completed-point count. Idempotent once
    /// a non-zero snapshot is taken.
    pub fn record_half(&mut self) {
        if self.points_at_half > 0 {
            return;
        }

        self.mementos.push(Memento::Half);
        self.points_at_half = self.active_game.point_count();
    }

    /// Reverse the most recent record operation. No-op on an empty stack.
    pub fn undo(&mut self) {
        if let Some(memento) = self.mementos.pop() {
            memento.apply(self);
        }
    }

    fn change_possession(&mut self) {
        self.home_possession = !self.home_possession;
    }

    fn take_actor(&mut self) -> String {
        self.first_actor.take().unwrap_or_default()
    }

    // === Outputs ===

    /// Human-readable line per event of the active point, oldest first.
    /// Empty between points.
    pub fn undo_history(&self) -> impl Iterator<Item = String> + '_ {
        self.active_point
            .iter()
            .flat_map(|point| point.events().iter())
            .map(Event::to_string)
    }

    /// Build the owned wire snapshot consumed by the backup and upload
    /// collaborators. Cheap: the point and event lists are persistent
    /// structures.
    #[must_use]
    pub fn serialize(&self) -> GameSnapshot {
        let mut home_roster: Vec<String> = self.home_participants.iter().cloned().collect();
        let mut away_roster: Vec<String> = self.away_participants.iter().cloned().collect();
        home_roster.sort();
        away_roster.sort();

        GameSnapshot {
            league_id: self.league_id.clone(),
            week: self.week,
            home_team: self.home_team.name.clone(),
            away_team: self.away_team.name.clone(),
            home_roster,
            away_roster,
            home_score: self.home_score.to_string(),
            away_score: self.away_score.to_string(),
            home_team_id: self.home_team.id,
            away_team_id: self.away_team.id,
            points: self
                .active_game
                .points()
                .iter()
                .map(|point| point.events().iter().cloned().collect())
                .collect(),
        }
    }
}
