/// Default edge length of the square board.
pub const BOARD_SIZE: i32 = 6;

/// Ship lengths placed on every board, largest first.
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Number of ships a side must lose to end the game.
pub const FLEET_SIZE: usize = FLEET.len();

/// Placement attempts allowed for a whole fleet before starting over.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;
