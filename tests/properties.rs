use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pl_decade::match_record::{GAMES_PER_SEASON, MAX_POINTS, decompose_points, synthesize_goals};
use pl_decade::points::{
    ADJUSTED_CAP, ADJUSTED_FLOOR, adjust_for_strength, base_points, points_band,
};
use pl_decade::season_table::generate;
use pl_decade::{TeamRegistry, summarize, team_history};

proptest! {
    #[test]
    fn base_points_within_band(seed in any::<u64>(), position in 1u32..=20) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (lo, hi) = points_band(position).unwrap();
        let p = base_points(position, &mut rng);
        prop_assert!(lo <= p && p <= hi);
    }

    #[test]
    fn adjusted_points_clamped(
        seed in any::<u64>(),
        position in 1u32..=20,
        strength in 1.0f64..20.0,
    ) {
        prop_assume!(strength != position as f64);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let base = base_points(position, &mut rng);
        let p = adjust_for_strength(base, position, strength, &mut rng);
        prop_assert!((ADJUSTED_FLOOR..=ADJUSTED_CAP).contains(&p));
    }

    #[test]
    fn decomposition_invariants(
        seed in any::<u64>(),
        points in 0u32..=MAX_POINTS,
        position in 1u32..=20,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let r = decompose_points(points, &mut rng);
        prop_assert_eq!(r.wins + r.draws + r.losses, GAMES_PER_SEASON);
        prop_assert!(r.points() <= points);
        let (gf, ga) = synthesize_goals(position, r, &mut rng);
        prop_assert!(gf >= 15 && ga >= 15);
    }

    #[test]
    fn summary_matches_history(seed in any::<u64>(), seasons in 1usize..6) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let labels = pl_decade::config::season_labels(2010, seasons);
        let records = generate(&TeamRegistry::premier_league(), &labels, &mut rng);
        let summary = summarize(&records);

        prop_assert!(summary.windows(2).all(|w| w[0].total_points >= w[1].total_points));
        for s in &summary {
            let history = team_history(&records, &s.team);
            prop_assert_eq!(s.seasons_played as usize, history.len());
            prop_assert_eq!(s.total_points, history.iter().map(|r| r.points).sum::<u32>());
            prop_assert!(history.windows(2).all(|w| w[0].season <= w[1].season));
        }
    }
}
