//! Commonly used types and utilities for ease of import.

pub use crate::{
    random_board, Board, BoardError, Coordinate, Game, GameStatus, Outcome, Player, RandomAi,
    Side, BOARD_SIZE,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, HumanPlayer};
