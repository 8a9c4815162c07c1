//! Crash-recovery autosave: background snapshot writes.
//!
//! After every scored point the bookkeeper hands an owned [`GameSnapshot`]
//! to a detached writer thread. The write is not on the correctness path:
//! it never blocks scorekeeping, never touches live state, and a failure
//! is logged and swallowed.

use std::fs;
use std::path::{Path, PathBuf};
use std::thread;

use chrono::Local;
use log::warn;
use thiserror::Error;

use crate::snapshot::GameSnapshot;

/// Failure to persist a snapshot.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("could not encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write backup file: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes snapshots under `<root>/<date>/<time>_<home>-<away>.json`.
///
/// The date and time stamps are fixed when the autosaver is created (game
/// start), so every save of one game lands in the same file and each game
/// gets its own.
#[derive(Clone, Debug)]
pub struct Autosaver {
    root: PathBuf,
    datestamp: String,
    timestamp: String,
}

impl Autosaver {
    /// Create an autosaver rooted at `root`, stamped with the current
    /// local date and time.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        let now = Local::now();
        Self {
            root,
            datestamp: now.format("%Y-%m-%d").to_string(),
            timestamp: now.format("%H-%M").to_string(),
        }
    }

    /// The file a snapshot of this game saves to.
    #[must_use]
    pub fn target_path(&self, snapshot: &GameSnapshot) -> PathBuf {
        self.root.join(&self.datestamp).join(format!(
            "{}_{}.json",
            self.timestamp,
            snapshot.game_name()
        ))
    }

    /// Write the snapshot synchronously. Creates the dated directory as
    /// needed and returns the written path.
    pub fn write(&self, snapshot: &GameSnapshot) -> Result<PathBuf, BackupError> {
        let path = self.target_path(snapshot);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&path, snapshot.to_json()?)?;
        Ok(path)
    }

    /// Write the snapshot on a detached thread. Failures are logged, never
    /// surfaced; the handle is returned for callers that want to wait
    /// (tests) and is safe to drop.
    pub fn spawn(&self, snapshot: GameSnapshot) -> thread::JoinHandle<()> {
        let saver = self.clone();
        thread::spawn(move || {
            if let Err(err) = saver.write(&snapshot) {
                warn!("autosave failed: {err}");
            }
        })
    }

    /// The configured root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Event, EventKind};

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            league_id: "ocl-2024".to_string(),
            week: 4,
            home_team: "Karma".to_string(),
            away_team: "Flick".to_string(),
            home_roster: vec![],
            away_roster: vec![],
            home_score: "1".to_string(),
            away_score: "0".to_string(),
            home_team_id: 1,
            away_team_id: 2,
            points: vec![vec![Event::new(EventKind::Point, "Al")]],
        }
    }

    #[test]
    fn test_write_creates_dated_file() {
        let dir = tempfile::tempdir().unwrap();
        let saver = Autosaver::new(dir.path().to_path_buf());

        let path = saver.write(&snapshot()).unwrap();

        assert!(path.starts_with(dir.path()));
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .ends_with("_Karma-Flick.json"));

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["homeScore"], "1");
    }

    #[test]
    fn test_rewrite_same_game_lands_in_same_file() {
        let dir = tempfile::tempdir().unwrap();
        let saver = Autosaver::new(dir.path().to_path_buf());

        let first = saver.write(&snapshot()).unwrap();
        let second = saver.write(&snapshot()).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_spawn_writes_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let saver = Autosaver::new(dir.path().to_path_buf());
        let expected = saver.target_path(&snapshot());

        saver.spawn(snapshot()).join().unwrap();

        assert!(expected.exists());
    }

    #[test]
    fn test_spawn_failure_does_not_panic() {
        // A root that cannot be created: a file stands where the
        // directory should go.
        let dir = tempfile::tempdir().unwrap();
        let blocked = dir.path().join("blocked");
        fs::write(&blocked, b"in the way").unwrap();

        let saver = Autosaver::new(blocked);
        saver.spawn(snapshot()).join().unwrap();
    }
}
