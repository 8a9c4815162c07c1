//! Season schedule: the matchup documents the league server publishes.

use chrono::NaiveDateTime;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use super::LoadError;

const GAME_TIME_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// One scheduled game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matchup {
    pub week: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    pub game_start: NaiveDateTime,
    pub game_end: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
struct MatchupRecord {
    week: u32,
    home_team: u32,
    away_team: u32,
    game_start: String,
    game_end: String,
}

impl Matchup {
    fn from_record(record: MatchupRecord) -> Result<Self, LoadError> {
        Ok(Self {
            week: record.week,
            home_team_id: record.home_team,
            away_team_id: record.away_team,
            game_start: parse_game_time(&record.game_start)?,
            game_end: parse_game_time(&record.game_end)?,
        })
    }

    /// Picker label: `"18:00-19:30: Home vs Away"`.
    #[must_use]
    pub fn description(&self, team_names: &FxHashMap<u32, String>) -> String {
        let name = |id: u32| {
            team_names
                .get(&id)
                .map_or("?", String::as_str)
                .to_string()
        };

        format!(
            "{}-{}: {} vs {}",
            self.game_start.format("%H:%M"),
            self.game_end.format("%H:%M"),
            name(self.home_team_id),
            name(self.away_team_id)
        )
    }
}

fn parse_game_time(value: &str) -> Result<NaiveDateTime, LoadError> {
    NaiveDateTime::parse_from_str(value, GAME_TIME_FORMAT).map_err(|_| LoadError::Timestamp {
        value: value.to_string(),
    })
}

/// Parse the schedule document: a JSON array of
/// `{week, home_team, away_team, game_start, game_end}`.
pub fn load_matchups(json: &str) -> Result<Vec<Matchup>, LoadError> {
    let records: Vec<MatchupRecord> = serde_json::from_str(json)?;
    records.into_iter().map(Matchup::from_record).collect()
}
