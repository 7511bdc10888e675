use rand::rngs::SmallRng;
use rand::Rng;

use super::Player;
use crate::board::Board;
use crate::coordinate::Coordinate;

/// Computer opponent firing at uniformly random cells.
///
/// It keeps no memory of earlier shots; repeats are refused by the board and
/// the turn contract asks again.
#[derive(Debug, Default)]
pub struct RandomAi;

impl RandomAi {
    pub fn new() -> Self {
        Self
    }
}

impl Player for RandomAi {
    fn choose_target(&mut self, rng: &mut SmallRng, target: &Board) -> anyhow::Result<Coordinate> {
        let size = target.size();
        if size == 0 {
            return Err(anyhow::anyhow!("cannot target an empty board"));
        }
        Ok(Coordinate::new(
            rng.random_range(0..size),
            rng.random_range(0..size),
        ))
    }
}
