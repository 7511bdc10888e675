use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    random_board, BoardError, Coordinate, Orientation, Outcome, Ship, BOARD_SIZE, FLEET,
    FLEET_SIZE,
};

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Horizontal), Just(Orientation::Vertical)]
}

fn touching(a: Coordinate, b: Coordinate) -> bool {
    (a.row - b.row).abs() <= 1 && (a.col - b.col).abs() <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_are_contiguous_from_bow(
        row in -2i32..10,
        col in -2i32..10,
        length in 1usize..6,
        orient in orientation(),
    ) {
        let bow = Coordinate::new(row, col);
        let ship = Ship::new(bow, length, orient);
        let cells: Vec<_> = ship.cells().collect();
        prop_assert_eq!(cells.len(), length);
        prop_assert_eq!(cells[0], bow);
        for (i, c) in cells.iter().enumerate() {
            let i = i as i32;
            match orient {
                Orientation::Horizontal => {
                    prop_assert_eq!(*c, Coordinate::new(row, col + i));
                }
                Orientation::Vertical => {
                    prop_assert_eq!(*c, Coordinate::new(row + i, col));
                }
            }
        }
    }

    #[test]
    fn random_fleet_ships_never_touch(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, BOARD_SIZE);
        let ships = board.ships();
        prop_assert_eq!(ships.len(), FLEET_SIZE);

        let mut lengths: Vec<_> = ships.iter().map(|s| s.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(lengths, FLEET.to_vec());

        for (i, a) in ships.iter().enumerate() {
            prop_assert!(a.cells().all(|c| !board.out(c)));
            for b in &ships[i + 1..] {
                for ca in a.cells() {
                    prop_assert!(b.cells().all(|cb| !touching(ca, cb)));
                }
            }
        }
    }

    #[test]
    fn second_shot_is_always_rejected(
        seed in any::<u64>(),
        row in 0..BOARD_SIZE,
        col in 0..BOARD_SIZE,
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BOARD_SIZE);
        let target = Coordinate::new(row, col);
        board.shoot(target).unwrap();
        let destroyed = board.destroyed();
        prop_assert_eq!(board.shoot(target).unwrap_err(), BoardError::AlreadyShot(target));
        prop_assert_eq!(board.destroyed(), destroyed);
    }

    #[test]
    fn every_ship_sinks_exactly_once(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = random_board(&mut rng, BOARD_SIZE);
        let mut sinks = 0;
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let before = board.destroyed();
                match board.shoot(Coordinate::new(row, col)) {
                    Ok(Outcome::Sunk) => {
                        sinks += 1;
                        prop_assert_eq!(board.destroyed(), before + 1);
                    }
                    Ok(_) => {
                        prop_assert_eq!(board.destroyed(), before);
                    }
                    Err(BoardError::AlreadyShot(_)) => {}
                    Err(e) => {
                        prop_assert!(false, "unexpected error {}", e);
                    }
                }
            }
        }
        prop_assert_eq!(sinks, FLEET_SIZE);
        prop_assert_eq!(board.destroyed(), FLEET_SIZE);
        prop_assert!(board.ships().iter().all(|s| s.is_sunk()));
    }

    #[test]
    fn same_seed_same_fleet(seed in any::<u64>()) {
        let a = random_board(&mut SmallRng::seed_from_u64(seed), BOARD_SIZE);
        let b = random_board(&mut SmallRng::seed_from_u64(seed), BOARD_SIZE);
        prop_assert_eq!(a.ships(), b.ships());
    }
}
