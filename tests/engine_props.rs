use proptest::prelude::*;
use salvo::{
    pick_target, GameConfig, GameEngine, Outcome, Phase, RngSource, ScriptedSource, Shot, Side,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Plays a whole random game and checks the turn rule on every shot.
    #[test]
    fn turn_follows_hits(seed in any::<u64>()) {
        let mut engine = GameEngine::with_seed(GameConfig::default(), seed).unwrap();
        let mut shooter = RngSource::seeded(seed ^ 0x5eed);
        engine.place_remaining_randomly().unwrap();

        let mut calls = 0;
        while engine.phase() == Phase::Playing {
            calls += 1;
            prop_assert!(calls <= 100, "human ran out of cells");
            let enemy_before = engine.board(Side::Ai).ships_remaining();
            let (x, y) = pick_target(engine.board(Side::Ai), &mut shooter).unwrap();
            let report = engine.fire_at(x, y).unwrap();

            let sunk = matches!(report.shot, Shot::Sunk { .. }) as usize;
            prop_assert_eq!(report.enemy_ships_remaining, enemy_before - sunk);

            if report.shot.is_hit() || report.outcome == Some(Outcome::Win) {
                prop_assert!(report.ai_volley.is_empty());
            } else {
                prop_assert!(!report.ai_volley.is_empty());
                let (last, rest) = report.ai_volley.split_last().unwrap();
                prop_assert!(rest.iter().all(|s| s.shot.is_hit()));
                if report.outcome == Some(Outcome::Loss) {
                    prop_assert!(last.shot.is_hit());
                } else {
                    prop_assert_eq!(last.shot, Shot::Miss);
                }
            }
            match engine.phase() {
                Phase::Playing => prop_assert_eq!(engine.turn(), Some(Side::Player)),
                _ => prop_assert!(engine.outcome().is_some()),
            }
        }

        match engine.outcome() {
            Some(Outcome::Win) => prop_assert!(engine.board(Side::Ai).all_sunk()),
            Some(Outcome::Loss) => prop_assert!(engine.board(Side::Player).all_sunk()),
            None => prop_assert!(false, "game ended without an outcome"),
        }
    }

    #[test]
    fn state_roundtrip(seed in any::<u64>(), shots in 0usize..30) {
        let mut engine = GameEngine::with_seed(GameConfig::default(), seed).unwrap();
        let mut shooter = RngSource::seeded(seed.wrapping_add(1));
        engine.place_remaining_randomly().unwrap();
        for _ in 0..shots {
            if engine.phase() != Phase::Playing {
                break;
            }
            let (x, y) = pick_target(engine.board(Side::Ai), &mut shooter).unwrap();
            engine.fire_at(x, y).unwrap();
        }
        let state = engine.state();
        let restored = GameEngine::from_state(state.clone(), ScriptedSource::default()).unwrap();
        prop_assert_eq!(restored.state(), state);
    }
}
