//! League documents: the JSON models the roster and schedule sources
//! supply.
//!
//! The core only consumes these; fetching them is the caller's concern.

mod schedule;
mod team;

pub use schedule::{load_matchups, Matchup};
pub use team::{Gender, Team};

use serde::Deserialize;
use thiserror::Error;

/// Failure to parse a league document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed league document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unparseable game time {value:?}")]
    Timestamp { value: String },
}

/// The league identity document: `{id, name}`.
#[derive(Clone, Debug, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
}

impl League {
    /// Parse the league document.
    pub fn load(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Deserialize)]
struct TeamRecord {
    name: String,
    id: u32,
    players: Vec<PlayerRecord>,
}

#[derive(Debug, Deserialize)]
struct PlayerRecord {
    name: String,
    is_male: bool,
}

/// All teams in the league, in document order.
#[derive(Clone, Debug, Default)]
pub struct Teams {
    teams: Vec<Team>,
}

impl Teams {
    /// Parse the roster document: a JSON array of
    /// `{name, id, players: [{name, is_male}]}`.
    pub fn load(json: &str) -> Result<Self, LoadError> {
        let records: Vec<TeamRecord> = serde_json::from_str(json)?;

        let teams = records
            .into_iter()
            .map(|record| {
                let mut team = Team::new(record.name, record.id);
                for player in record.players {
                    team.add_roster_player(player.name, player.is_male);
                }
                team
            })
            .collect();

        Ok(Self { teams })
    }

    /// Team at the picker index.
    #[must_use]
    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    /// Iterate over all teams.
    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    /// Every playing name across the league, team by team.
    #[must_use]
    pub fn all_players(&self) -> Vec<String> {
        self.teams.iter().flat_map(Team::roster).collect()
    }

    /// Look up a player's declared gender, searching every team.
    #[must_use]
    pub fn player_gender(&self, name: &str) -> Gender {
        for team in &self.teams {
            if team.women().iter().any(|player| player == name) {
                return Gender::Female;
            }
            if team.men().iter().any(|player| player == name) {
                return Gender::Male;
            }
        }

        Gender::Unknown
    }

    /// Team names for pickers. The "Substitute" pseudo-team holding the
    /// league's spare-player pool is filtered out.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.teams
            .iter()
            .filter(|team| team.name != "Substitute")
            .map(|team| team.name.clone())
            .collect()
    }
}
