use battleship::{Board, BoardRole, FireResult};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

fn random_board(seed: u64, size: usize, ships: usize) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::new(size, "Player", BoardRole::Own).unwrap();
    board.place_random_ships(&mut rng, ships).unwrap();
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn remaining_ships_tracks_hits(
        seed in any::<u64>(),
        size in 1usize..8,
        shots in proptest::collection::vec((0usize..8, 0usize..8), 0..64),
    ) {
        let ships = (seed as usize % (size * size)) + 1;
        let mut board = random_board(seed, size, ships);
        prop_assert_eq!(board.remaining_ships(), ships);
        for (x, y) in shots {
            let before = board.remaining_ships();
            let had_ship = board.has_ship(x, y);
            match board.fire(x, y) {
                Ok(FireResult::Hit) => {
                    prop_assert!(had_ship);
                    prop_assert_eq!(board.remaining_ships(), before - 1);
                }
                Ok(FireResult::Miss) => {
                    prop_assert!(!had_ship);
                    prop_assert_eq!(board.remaining_ships(), before);
                }
                Err(_) => prop_assert_eq!(board.remaining_ships(), before),
            }
        }
    }

    #[test]
    fn fire_is_not_repeatable(seed in any::<u64>(), x in 0usize..5, y in 0usize..5) {
        let mut board = random_board(seed, 5, 5);
        board.fire(x, y).unwrap();
        let after = board.clone();
        prop_assert!(board.fire(x, y).is_err());
        prop_assert_eq!(board, after);
    }

    #[test]
    fn placed_ship_is_present(x in 0usize..7, y in 0usize..7) {
        let mut board = Board::new(7, "Player", BoardRole::Own).unwrap();
        board.place_ship(x, y).unwrap();
        prop_assert!(board.has_ship(x, y));
        prop_assert!(!board.is_open(x, y));
    }
}
