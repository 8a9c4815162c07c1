//! The completed-point list for one game.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::point::Point;

/// An ordered list of completed points.
///
/// Points are appended as they are scored; `pop_point` exists solely so
/// undo can pull the most recent point back out. Insertion order is
/// chronological order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Game {
    points: Vector<Point>,
}

impl Game {
    /// Create an empty game.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a completed point.
    pub fn add_point(&mut self, point: Point) {
        self.points.push_back(point);
    }

    /// Remove and return the most recent point, if any.
    pub fn pop_point(&mut self) -> Option<Point> {
        self.points.pop_back()
    }

    /// Number of completed points.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The completed points, oldest first.
    #[must_use]
    pub fn points(&self) -> &Vector<Point> {
        &self.points
    }
}
