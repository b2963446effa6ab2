use battleship::prelude::*;
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Random-vs-random games always end, within two shots per cell.
    #[test]
    fn game_terminates(
        seed in any::<u64>(),
        size in 1usize..8,
        ship_seed in any::<usize>(),
        computer_first in any::<bool>(),
    ) {
        let ships = ship_seed % (size * size) + 1;
        let first = if computer_first { Side::Computer } else { Side::Human };
        let config = GameConfig::new(size, ships).with_first(first);
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&config, &mut rng).unwrap();
        let mut p1 = RandomPlayer::new();
        let mut p2 = RandomPlayer::new();

        let winner = game.run(&mut p1, &mut p2, &mut rng).unwrap();
        prop_assert!(game.shots() <= 2 * size * size);
        prop_assert_eq!(game.board(winner.opponent()).remaining_ships(), 0);
        prop_assert!(game.board(winner).remaining_ships() >= 1);
        let expected = if winner == Side::Human { GameStatus::Won } else { GameStatus::Lost };
        prop_assert_eq!(game.status(), expected);
    }

    /// Shots alternate strictly: the side to move flips after every shot.
    #[test]
    fn turns_alternate(seed in any::<u64>()) {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = Game::new(&config, &mut rng).unwrap();
        let mut p1 = RandomPlayer::new();
        let mut p2 = RandomPlayer::new();
        let mut expected = Side::Human;
        while game.winner().is_none() {
            let shot = game.play_turn(&mut p1, &mut p2, &mut rng).unwrap();
            prop_assert_eq!(shot.side, expected);
            expected = expected.opponent();
            prop_assert_eq!(game.turn(), expected);
        }
    }
}
