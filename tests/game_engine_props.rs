use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use salvo::{GameEngine, GameStatus, ShotError, ShotResult, FLEET, NUM_SHIPS, SHOT_BUDGET};

fn random_engine(seed: u64) -> (GameEngine, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let engine = GameEngine::with_fleet(&mut rng).unwrap();
    (engine, rng)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every placed fleet covers exactly 20 distinct cells, one run per ship.
    #[test]
    fn placement_has_no_overlap(seed in any::<u64>()) {
        let (engine, _) = random_engine(seed);
        let board = engine.board();
        prop_assert_eq!(board.ship_map().count_ones(), 20);

        let mut per_ship = [0usize; NUM_SHIPS];
        for r in 0..16 {
            for c in 0..16 {
                if let Some(i) = board.occupant(r, c) {
                    per_ship[i] += 1;
                    prop_assert!(board.placement(i).unwrap().cells().any(|cell| cell == (r, c)));
                }
            }
        }
        for i in 0..NUM_SHIPS {
            prop_assert_eq!(per_ship[i], FLEET[i].length());
        }
    }

    /// The budget drops by one per accepted shot and never on rejected ones.
    #[test]
    fn budget_tracks_accepted_shots(
        seed in any::<u64>(),
        shots in proptest::collection::vec((0..18usize, 0..18usize), 1..60),
    ) {
        let (mut engine, _) = random_engine(seed);
        let mut accepted = 0u32;
        for (r, c) in shots {
            let before = engine.clone();
            match engine.shoot(r, c) {
                Ok(_) => {
                    accepted += 1;
                    prop_assert_eq!(engine.shots_remaining(), before.shots_remaining() - 1);
                }
                Err(e) => {
                    prop_assert_eq!(&engine, &before);
                    if r >= 16 || c >= 16 {
                        prop_assert!(matches!(e, ShotError::OutOfBounds { .. } | ShotError::GameOver(_)), "unexpected error: {:?}", e);
                    }
                }
            }
            prop_assert_eq!(engine.shots_remaining(), SHOT_BUDGET - accepted);
        }
        if engine.shots_remaining() == 0 && !engine.is_won() {
            prop_assert_eq!(engine.status(), GameStatus::Lost);
        }
    }

    /// Score equals points of sunk ships minus one per miss.
    #[test]
    fn score_matches_history(seed in any::<u64>()) {
        let (mut engine, mut rng) = random_engine(seed);
        let mut misses = 0i32;
        let mut points = 0i32;
        while !engine.status().is_over() {
            let r = rng.random_range(0..16);
            let c = rng.random_range(0..16);
            match engine.shoot(r, c) {
                Ok(outcome) => match outcome.result {
                    ShotResult::Miss => misses += 1,
                    ShotResult::Sunk(kind) => points += kind.points(),
                    ShotResult::Hit(_) => {}
                },
                Err(e) => {
                    prop_assert_eq!(e, ShotError::AlreadyShot { row: r, col: c });
                }
            }
        }
        prop_assert_eq!(engine.score(), points - misses);
        let sunk_points: i32 = engine
            .snapshot()
            .ships
            .iter()
            .filter(|s| s.sunk)
            .map(|s| s.points)
            .sum();
        prop_assert_eq!(sunk_points, points);
    }

    /// Sinking a ship awards its points exactly once.
    #[test]
    fn sink_awards_once(seed in any::<u64>(), ship in 0..NUM_SHIPS) {
        let (mut engine, _) = random_engine(seed);
        let cells: Vec<_> = engine.board().placement(ship).unwrap().cells().collect();
        let mut sinks = 0;
        for (r, c) in cells.iter() {
            if let ShotResult::Sunk(kind) = engine.shoot(*r, *c).unwrap().result {
                prop_assert_eq!(kind, FLEET[ship]);
                sinks += 1;
            }
        }
        prop_assert_eq!(sinks, 1);
        prop_assert_eq!(engine.score(), FLEET[ship].points());
        for (r, c) in cells {
            prop_assert!(engine.shoot(r, c).is_err());
        }
        prop_assert_eq!(engine.score(), FLEET[ship].points());
    }
}
