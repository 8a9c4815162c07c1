//! Event representation: one recorded action within a point.
//!
//! Events are immutable once constructed and owned by the `Point` that
//! contains them. The serialized form is the upload/backup wire shape:
//! `{"type": "PULL", "firstActor": "...", "secondActor": null}`. The
//! capture timestamp is kept for local bookkeeping but never serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of recorded action.
///
/// Wire values are the upper-case kind names (`"PULL"`, `"PASS"`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EventKind {
    /// The opening throw of a point.
    Pull,
    /// A completed pass between two players.
    Pass,
    /// A goal, ending the point.
    Point,
    /// A defensive block.
    Defense,
    /// A throw the offense lost.
    Throwaway,
    /// A catchable disc the offense dropped.
    Drop,
}

/// A single recorded action.
///
/// `first_actor` is the player who initiated the action (thrower, defender,
/// scorer). `second_actor` is the receiver and is only present for passes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// What happened.
    #[serde(rename = "type")]
    pub kind: EventKind,

    /// The player who initiated the action.
    pub first_actor: String,

    /// The receiving player, for passes.
    pub second_actor: Option<String>,

    /// When the event was recorded. Not part of the wire format.
    #[serde(skip, default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Event {
    /// Create a single-actor event.
    #[must_use]
    pub fn new(kind: EventKind, first_actor: impl Into<String>) -> Self {
        Self {
            kind,
            first_actor: first_actor.into(),
            second_actor: None,
            timestamp: Utc::now(),
        }
    }

    /// Create a completed pass from `thrower` to `receiver`.
    #[must_use]
    pub fn pass(thrower: impl Into<String>, receiver: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Pass,
            first_actor: thrower.into(),
            second_actor: Some(receiver.into()),
            timestamp: Utc::now(),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            EventKind::Pull => write!(f, "{} pulled", self.first_actor),
            EventKind::Pass => match &self.second_actor {
                Some(receiver) => write!(f, "{} passed to {}", self.first_actor, receiver),
                None => write!(f, "{} passed", self.first_actor),
            },
            EventKind::Point => write!(f, "{} scored!", self.first_actor),
            EventKind::Defense => write!(f, "D by {}", self.first_actor),
            EventKind::Throwaway => write!(f, "{} threw it away", self.first_actor),
            EventKind::Drop => write!(f, "{} dropped the disc", self.first_actor),
        }
    }
}
