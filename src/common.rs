//! Common types for Seabattle: board errors and shot outcomes.

use crate::coordinate::Coordinate;

/// Result of a shot that landed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Outcome {
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot hit only water.
    Miss,
    /// Shot took the last segment of a ship.
    Sunk,
}

impl Outcome {
    /// Only a non-sinking hit lets the shooter fire again.
    pub fn grants_extra_turn(self) -> bool {
        matches!(self, Outcome::Hit)
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shot aimed outside the grid.
    OutOfBounds(Coordinate),
    /// Coordinate was already shot (or, before the game starts, reserved).
    AlreadyShot(Coordinate),
    /// Ship leaves the grid or touches another ship at the given cell.
    InvalidShipPlacement(Coordinate),
    /// Random fleet placement ran out of attempts.
    FleetGenerationExhausted { attempts: usize },
    /// Hit registered on a ship with no segments left.
    ShipAlreadySunk,
}

impl BoardError {
    /// Errors caused by a bad target choice; the shooter simply picks again.
    pub fn is_retryable_shot(&self) -> bool {
        matches!(self, BoardError::OutOfBounds(_) | BoardError::AlreadyShot(_))
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds(c) => write!(f, "Shot at {} is off the board", c),
            BoardError::AlreadyShot(c) => write!(f, "Cell {} has already been shot", c),
            BoardError::InvalidShipPlacement(c) => {
                write!(f, "Ship cannot be placed over cell {}", c)
            }
            BoardError::FleetGenerationExhausted { attempts } => {
                write!(f, "Unable to place the fleet within {} attempts", attempts)
            }
            BoardError::ShipAlreadySunk => write!(f, "Ship is already sunk"),
        }
    }
}

impl core::error::Error for BoardError {}
