//! Ship geometry and damage tracking.

use core::fmt;

use crate::common::BoardError;
use crate::coordinate::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Step from one ship cell to the next as (`dr`, `dc`).
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A straight run of cells starting at the bow, with remaining health.
///
/// A ship knows nothing about board bounds; the board validates placement.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Create an undamaged ship. `length` must be at least one.
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Self {
        debug_assert!(length > 0, "ship length must be positive");
        Ship {
            bow,
            length,
            orientation,
            remaining: length,
        }
    }

    /// Cells covered by the ship, bow first.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (dr, dc) = self.orientation.step();
        (0..self.length as i32).map(move |i| self.bow.offset(dr * i, dc * i))
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Take one segment of damage.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        self.remaining = self
            .remaining
            .checked_sub(1)
            .ok_or(BoardError::ShipAlreadySunk)?;
        Ok(())
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ bow: ({}, {}), length: {}, orientation: {:?}, remaining: {} }}",
            self.bow.row, self.bow.col, self.length, self.orientation, self.remaining,
        )
    }
}
