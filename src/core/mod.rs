//! Core log types: events, points, and the game they accumulate into.
//!
//! These are leaf data structures with no scorekeeping rules of their own;
//! the `bookkeeper` module drives them.

pub mod event;
pub mod game;
pub mod point;

pub use event::{Event, EventKind};
pub use game::Game;
pub use point::{Line, Point};
