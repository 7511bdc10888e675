use std::collections::VecDeque;
use std::io::Cursor;

use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    parse_target, take_turn, Board, BoardError, Coordinate, HumanPlayer, InputError,
    Orientation, Outcome, Player, RandomAi, Ship, Shot, BOARD_SIZE,
};

/// Fires at a fixed list of targets and remembers what the board refused.
struct Scripted {
    targets: VecDeque<Coordinate>,
    rejected: Vec<BoardError>,
    resolved: Vec<Shot>,
}

impl Scripted {
    fn new(targets: &[(i32, i32)]) -> Self {
        Self {
            targets: targets.iter().map(|&(r, c)| Coordinate::new(r, c)).collect(),
            rejected: Vec::new(),
            resolved: Vec::new(),
        }
    }
}

impl Player for Scripted {
    fn choose_target(&mut self, _rng: &mut SmallRng, _target: &Board) -> anyhow::Result<Coordinate> {
        self.targets
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }

    fn shot_rejected(&mut self, _target: Coordinate, err: &BoardError) {
        self.rejected.push(err.clone());
    }

    fn shot_resolved(&mut self, shot: Shot) {
        self.resolved.push(shot);
    }
}

#[test]
fn test_rejected_targets_do_not_consume_the_turn() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(BOARD_SIZE);
    board.shoot(Coordinate::new(0, 0)).unwrap();

    let mut player = Scripted::new(&[(0, 0), (6, 0), (3, 3)]);
    let shot = take_turn(&mut player, &mut rng, &mut board).unwrap();

    assert_eq!(shot.target, Coordinate::new(3, 3));
    assert_eq!(shot.outcome, Outcome::Miss);
    assert!(!shot.extra_turn());
    assert_eq!(
        player.rejected,
        vec![
            BoardError::AlreadyShot(Coordinate::new(0, 0)),
            BoardError::OutOfBounds(Coordinate::new(6, 0)),
        ]
    );
    assert_eq!(player.resolved, vec![shot]);
}

#[test]
fn test_hit_grants_extra_turn() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(BOARD_SIZE);
    board
        .place_ship(Ship::new(Coordinate::new(1, 1), 2, Orientation::Horizontal))
        .unwrap();
    board.reset_turn_state();

    let mut player = Scripted::new(&[(1, 1), (1, 2)]);
    let first = take_turn(&mut player, &mut rng, &mut board).unwrap();
    assert_eq!(first.outcome, Outcome::Hit);
    assert!(first.extra_turn());
    let second = take_turn(&mut player, &mut rng, &mut board).unwrap();
    assert_eq!(second.outcome, Outcome::Sunk);
    assert!(!second.extra_turn());
}

#[test]
fn test_random_ai_retries_until_free_cell() {
    let mut rng = SmallRng::seed_from_u64(99);
    let mut board = Board::new(BOARD_SIZE);
    let free = Coordinate::new(2, 3);
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let c = Coordinate::new(row, col);
            if c != free {
                board.shoot(c).unwrap();
            }
        }
    }

    let mut ai = RandomAi::new();
    let shot = take_turn(&mut ai, &mut rng, &mut board).unwrap();
    assert_eq!(shot.target, free);
    assert_eq!(shot.outcome, Outcome::Miss);
}

#[test]
fn test_random_ai_stays_on_board() {
    let mut rng = SmallRng::seed_from_u64(5);
    let board = Board::new(BOARD_SIZE);
    let mut ai = RandomAi::new();
    for _ in 0..500 {
        let c = ai.choose_target(&mut rng, &board).unwrap();
        assert!(!board.out(c), "{:?} is off the board", c);
    }
}

#[test]
fn test_parse_target() {
    assert_eq!(parse_target("1 1"), Ok(Coordinate::new(0, 0)));
    assert_eq!(parse_target("  3   4 \n"), Ok(Coordinate::new(2, 3)));
    assert_eq!(parse_target("0 0"), Ok(Coordinate::new(-1, -1)));
    assert_eq!(parse_target(""), Err(InputError::WrongTokenCount));
    assert_eq!(parse_target("1"), Err(InputError::WrongTokenCount));
    assert_eq!(parse_target("1 2 3"), Err(InputError::WrongTokenCount));
    assert_eq!(parse_target("a b"), Err(InputError::NotANumber));
    assert_eq!(parse_target("-1 2"), Err(InputError::NotANumber));
    assert_eq!(
        parse_target("99999999999 1"),
        Err(InputError::NotANumber)
    );
}

#[test]
fn test_human_reprompts_on_bad_input() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(BOARD_SIZE);
    let input = Cursor::new("\nfoo\n1 x\n7 1\n2 2\n");
    let mut human = HumanPlayer::new(input, Vec::new());

    let shot = take_turn(&mut human, &mut rng, &mut board).unwrap();
    assert_eq!(shot.target, Coordinate::new(1, 1));
    assert_eq!(shot.outcome, Outcome::Miss);

    let out = String::from_utf8(human.into_output()).unwrap();
    assert_eq!(out.matches("Enter two coordinates!").count(), 2);
    assert_eq!(out.matches("Enter numbers!").count(), 1);
    assert!(out.contains("off the board"));
    assert!(out.contains("Miss!"));
}

#[test]
fn test_human_input_closed_ends_turn_with_error() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(BOARD_SIZE);
    let mut human = HumanPlayer::new(Cursor::new("oops\n"), Vec::new());
    assert!(take_turn(&mut human, &mut rng, &mut board).is_err());
}

#[test]
fn test_human_sees_opponent_shots() {
    let mut human = HumanPlayer::new(Cursor::new(""), Vec::new());
    human.opponent_shot(Shot {
        target: Coordinate::new(0, 4),
        outcome: Outcome::Sunk,
    });
    let out = String::from_utf8(human.into_output()).unwrap();
    assert!(out.contains("Computer fires: 1 5"));
    assert!(out.contains("Your ship is destroyed!"));
}
