//! Ship definitions: size, orientation and remaining health.

use crate::common::BoardError;
use crate::config::MAX_SHIP_SIZE;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Grows to the right of the anchor (increasing `x`).
    Horizontal,
    /// Grows downwards from the anchor (increasing `y`).
    Vertical,
}

impl Orientation {
    /// Unit step `(dx, dy)` between consecutive segments.
    fn step(self) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A vessel of `size` cells. Health starts at `size` and drops by one per hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    size: usize,
    orientation: Orientation,
    health: usize,
    origin: Option<(usize, usize)>,
}

impl Ship {
    /// Create an unplaced ship. Sizes outside `1..=MAX_SHIP_SIZE` are rejected.
    pub fn new(size: usize, orientation: Orientation) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_SHIP_SIZE {
            return Err(BoardError::InvalidShipSize(size));
        }
        Ok(Ship {
            size,
            orientation,
            health: size,
            origin: None,
        })
    }

    /// Take one point of damage. Health never drops below zero.
    pub fn hit(&mut self) {
        self.health = self.health.saturating_sub(1);
    }

    /// `true` while at least one segment is undamaged.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn health(&self) -> usize {
        self.health
    }

    /// Anchor `(x, y)` once the ship sits on a board.
    pub fn origin(&self) -> Option<(usize, usize)> {
        self.origin
    }

    pub(crate) fn set_origin(&mut self, x: usize, y: usize) {
        self.origin = Some((x, y));
    }

    /// Coordinates the ship would cover when anchored at `(x, y)`.
    /// No bounds checking happens here.
    pub fn segments(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let (dx, dy) = self.orientation.step();
        (0..self.size).map(move |i| (x + i * dx, y + i * dy))
    }
}
