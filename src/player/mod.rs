//! Player trait and implementations
//!
//! This module defines the Player trait, the turn contract every player goes
//! through, and the concrete players:
//! - RandomAi: uniform random targeting
//! - HumanPlayer: interactive line-based player

use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::{BoardError, Outcome};
use crate::coordinate::Coordinate;

/// A shot that resolved on the target board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Shot {
    pub target: Coordinate,
    pub outcome: Outcome,
}

impl Shot {
    /// Whether the shooter moves again.
    pub fn extra_turn(&self) -> bool {
        self.outcome.grants_extra_turn()
    }
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback from its own and the opponent's shots
pub trait Player {
    /// Choose the next coordinate to fire at on `target`.
    fn choose_target(&mut self, rng: &mut SmallRng, target: &Board) -> anyhow::Result<Coordinate>;

    /// Called before the player's move with both boards.
    fn turn_started(&mut self, _own: &Board, _target: &Board) {}

    /// A chosen target was refused by the board; another will be requested.
    fn shot_rejected(&mut self, _target: Coordinate, _err: &BoardError) {}

    /// Inform the player of the result of its last shot.
    fn shot_resolved(&mut self, _shot: Shot) {}

    /// Inform the player of an opponent shot against its board.
    fn opponent_shot(&mut self, _shot: Shot) {}
}

/// Let `player` fire at `target` until a shot lands.
///
/// Off-board and repeated targets are reported back to the player and do not
/// use up the turn. Any other board error ends the turn with an error.
pub fn take_turn(
    player: &mut dyn Player,
    rng: &mut SmallRng,
    target: &mut Board,
) -> anyhow::Result<Shot> {
    loop {
        let coord = player.choose_target(rng, target)?;
        match target.shoot(coord) {
            Ok(outcome) => {
                let shot = Shot {
                    target: coord,
                    outcome,
                };
                log::debug!("shot at ({}) -> {:?}", coord, outcome);
                player.shot_resolved(shot);
                return Ok(shot);
            }
            Err(err) if err.is_retryable_shot() => {
                log::debug!("shot rejected: {}", err);
                player.shot_rejected(coord, &err);
            }
            Err(err) => return Err(anyhow::anyhow!(err)),
        }
    }
}

pub mod ai;
pub use ai::RandomAi;

#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
pub use cli::HumanPlayer;
