use farben::GameConfig;
use farben::sim::{GameState, KeyState};
use proptest::prelude::*;

fn keys(held: (bool, bool, bool)) -> KeyState {
    KeyState {
        left: held.0,
        right: held.1,
        space: held.2,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn paddle_stays_in_field(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<(bool, bool, bool)>(), 0..600),
    ) {
        let mut state = GameState::try_new(GameConfig::with_seed(seed)).unwrap();
        let (min_x, max_x) = state.paddle.x_bounds();
        for held in inputs {
            state.update(&keys(held));
            let x = state.paddle.center().x;
            prop_assert!(x >= min_x && x <= max_x, "paddle x {} outside [{}, {}]", x, min_x, max_x);
        }
    }

    #[test]
    fn bricks_and_lives_never_increase(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<(bool, bool, bool)>(), 0..2000),
    ) {
        let mut state = GameState::try_new(GameConfig::with_seed(seed)).unwrap();
        let mut bricks = state.score();
        let mut lives = state.lives();
        let mut alive = state.is_alive();
        for held in inputs {
            state.update(&keys(held));
            prop_assert!(state.score() <= bricks);
            prop_assert!(state.lives() <= lives);
            // Once over, always over
            prop_assert!(alive || !state.is_alive());
            bricks = state.score();
            lives = state.lives();
            alive = state.is_alive();
        }
    }

    #[test]
    fn same_seed_same_trajectory(
        seed in any::<u64>(),
        inputs in prop::collection::vec(any::<(bool, bool, bool)>(), 0..1000),
    ) {
        let mut a = GameState::try_new(GameConfig::with_seed(seed)).unwrap();
        let mut b = GameState::try_new(GameConfig::with_seed(seed)).unwrap();
        for held in inputs {
            a.update(&keys(held));
            b.update(&keys(held));
            prop_assert_eq!(a.ball.center(), b.ball.center());
            prop_assert_eq!(a.lives(), b.lives());
            prop_assert_eq!(a.events(), b.events());
        }
    }
}
