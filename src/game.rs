//! Fleet generation and the alternating turn loop.

use alloc::boxed::Box;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    common::BoardError,
    config::{FLEET, FLEET_SIZE, MAX_PLACEMENT_ATTEMPTS},
    coordinate::Coordinate,
    player::{take_turn, Player, Shot},
    ship::{Orientation, Ship},
};

/// Try once to place the standard fleet at random on a fresh board.
///
/// Bows are drawn from `0..=size` on both axes, so some candidates start just
/// off the grid and are refused by the board like any other bad placement.
/// The attempt budget covers the whole fleet. On success the setup
/// reservations are dropped and the board is ready to be shot at.
pub fn generate_random_fleet<R: Rng>(
    rng: &mut R,
    size: i32,
) -> Result<Board, BoardError> {
    let mut board = Board::new(size);
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Err(BoardError::FleetGenerationExhausted {
                    attempts: MAX_PLACEMENT_ATTEMPTS,
                });
            }
            let bow = Coordinate::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place_ship(Ship::new(bow, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::InvalidShipPlacement(_)) => continue,
                Err(e) => return Err(e),
            }
        }
    }
    log::debug!("fleet placed after {} attempts", attempts);
    board.reset_turn_state();
    Ok(board)
}

/// Generate fleets until one fits.
pub fn random_board<R: Rng>(rng: &mut R, size: i32) -> Board {
    loop {
        match generate_random_fleet(rng, size) {
            Ok(board) => return board,
            Err(e) => log::debug!("regenerating board: {}", e),
        }
    }
}

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    /// Moves first; its board is shown openly.
    First,
    /// Moves second; its board is concealed.
    Second,
}

impl Side {
    fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Finished { winner: Side },
}

/// What happened during one call to [`Game::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub side: Side,
    pub shot: Shot,
    pub status: GameStatus,
}

struct Seat<'a> {
    player: Box<dyn Player + 'a>,
    board: Board,
    shots: usize,
}

/// Active seat first, the one being shot at second.
fn split_seats<'s, 'a>(
    seats: &'s mut [Seat<'a>; 2],
    active: Side,
) -> (&'s mut Seat<'a>, &'s mut Seat<'a>) {
    let [first, second] = seats;
    match active {
        Side::First => (first, second),
        Side::Second => (second, first),
    }
}

/// A session between two players, each owning a board.
pub struct Game<'a> {
    seats: [Seat<'a>; 2],
    turn: usize,
    rng: SmallRng,
}

impl<'a> Game<'a> {
    /// Create a game with freshly generated fleets. The second board is
    /// concealed.
    pub fn new(
        size: i32,
        first: Box<dyn Player + 'a>,
        second: Box<dyn Player + 'a>,
        mut rng: SmallRng,
    ) -> Self {
        let first_board = random_board(&mut rng, size);
        let mut second_board = random_board(&mut rng, size);
        second_board.set_concealed(true);
        Self::with_boards(first, first_board, second, second_board, rng)
    }

    /// Create a game from prepared boards.
    pub fn with_boards(
        first: Box<dyn Player + 'a>,
        first_board: Board,
        second: Box<dyn Player + 'a>,
        second_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            seats: [
                Seat {
                    player: first,
                    board: first_board,
                    shots: 0,
                },
                Seat {
                    player: second,
                    board: second_board,
                    shots: 0,
                },
            ],
            turn: 0,
            rng,
        }
    }

    /// Board belonging to `side`.
    pub fn board(&self, side: Side) -> &Board {
        &self.seats[side.index()].board
    }

    /// Turn counter; only advances when the turn passes.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Side whose move it is.
    pub fn active_side(&self) -> Side {
        if self.turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    /// Shots landed by `side`, rejected attempts excluded.
    pub fn shots_fired(&self, side: Side) -> usize {
        self.seats[side.index()].shots
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board(Side::Second).destroyed() == FLEET_SIZE {
            GameStatus::Finished { winner: Side::First }
        } else if self.board(Side::First).destroyed() == FLEET_SIZE {
            GameStatus::Finished { winner: Side::Second }
        } else {
            GameStatus::InProgress
        }
    }

    /// Let the active side take one move. A hit keeps the turn with the same
    /// side; a miss or a sink passes it.
    pub fn play_turn(&mut self) -> anyhow::Result<TurnReport> {
        if let GameStatus::Finished { .. } = self.status() {
            return Err(anyhow::anyhow!("game is already over"));
        }
        let side = self.active_side();
        let (active, passive) = split_seats(&mut self.seats, side);
        active.player.turn_started(&active.board, &passive.board);
        let shot = take_turn(active.player.as_mut(), &mut self.rng, &mut passive.board)?;
        active.shots += 1;
        passive.player.opponent_shot(shot);

        if !shot.extra_turn() {
            self.turn += 1;
        }
        let status = self.status();
        Ok(TurnReport { side, shot, status })
    }

    /// Play until one fleet is gone and return the winner.
    pub fn run(&mut self) -> anyhow::Result<Side> {
        loop {
            let report = self.play_turn()?;
            if let GameStatus::Finished { winner } = report.status {
                log::info!("game over after {} turns, {:?} wins", self.turn, winner);
                return Ok(winner);
            }
        }
    }
}
