//! The wire snapshot of a game.
//!
//! `GameSnapshot` is the owned value handed to the backup and upload
//! collaborators. Its JSON form is the league server's expected shape and
//! must stay stable:
//!
//! ```json
//! {
//!   "league_id": "...", "week": 4,
//!   "homeTeam": "...", "awayTeam": "...",
//!   "homeRoster": ["..."], "awayRoster": ["..."],
//!   "homeScore": "13", "awayScore": "11",
//!   "homeTeamId": 1, "awayTeamId": 2,
//!   "points": [[{"type": "PULL", "firstActor": "...", "secondActor": null}]]
//! }
//! ```
//!
//! Scores are strings; rosters are the accumulated participant sets
//! (everyone who played at least one point), sorted.

use serde::{Deserialize, Serialize};

use crate::core::Event;

/// Owned, serializable snapshot of one game.
///
/// Built by [`Bookkeeper::serialize`](crate::Bookkeeper::serialize);
/// never holds references into the live scorekeeper, so background
/// writers can own it outright.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    #[serde(rename = "league_id")]
    pub league_id: String,
    pub week: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_roster: Vec<String>,
    pub away_roster: Vec<String>,
    pub home_score: String,
    pub away_score: String,
    pub home_team_id: u32,
    pub away_team_id: u32,
    /// One inner list per completed point, oldest first.
    pub points: Vec<Vec<Event>>,
}

impl GameSnapshot {
    /// `"<home>-<away>"`, used in backup file names.
    #[must_use]
    pub fn game_name(&self) -> String {
        format!("{}-{}", self.home_team, self.away_team)
    }

    /// Encode to the wire JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
