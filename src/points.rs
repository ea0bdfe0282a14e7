use rand::Rng;

use crate::registry::TeamRegistry;

/// Inclusive points bands, indexed by finishing position - 1.
pub const POINTS_BANDS: [(u32, u32); 20] = [
    (85, 100), // champions
    (75, 90),
    (70, 85),
    (65, 78),
    (60, 72),
    (55, 68),
    (50, 62),
    (45, 58),
    (42, 55),
    (40, 52),
    (38, 50),
    (36, 48),
    (34, 46),
    (32, 44),
    (30, 42),
    (28, 40),
    (25, 38),
    (20, 35), // relegation
    (15, 30),
    (10, 25),
];

/// Base used for positions outside the table.
pub const FALLBACK_BASE_POINTS: u32 = 35;

pub const ADJUSTED_FLOOR: u32 = 15;
pub const ADJUSTED_CAP: u32 = 95;

pub fn points_band(position: u32) -> Option<(u32, u32)> {
    let idx = position.checked_sub(1)? as usize;
    POINTS_BANDS.get(idx).copied()
}

pub fn base_points(position: u32, rng: &mut impl Rng) -> u32 {
    match points_band(position) {
        Some((lo, hi)) => rng.gen_range(lo..=hi),
        None => FALLBACK_BASE_POINTS,
    }
}

/// Nudge a base total by how the team usually finishes.
///
/// A side whose long-run average position is worse than `position` loses
/// 3-8 points; one that usually does better gains 2-6. Adjusted totals are
/// kept inside [`ADJUSTED_FLOOR`, `ADJUSTED_CAP`].
pub fn adjust_for_strength(base: u32, position: u32, strength: f64, rng: &mut impl Rng) -> u32 {
    let pos = position as f64;
    if strength > pos {
        let penalty = rng.gen_range(3..=8);
        base.saturating_sub(penalty).clamp(ADJUSTED_FLOOR, ADJUSTED_CAP)
    } else if strength < pos {
        let bonus = rng.gen_range(2..=6);
        (base + bonus).clamp(ADJUSTED_FLOOR, ADJUSTED_CAP)
    } else {
        base
    }
}

pub fn synthesize_points(
    position: u32,
    team: &str,
    registry: &TeamRegistry,
    rng: &mut impl Rng,
) -> u32 {
    let base = base_points(position, rng);
    adjust_for_strength(base, position, registry.strength(team), rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn bands_never_increase_down_the_table() {
        for pair in POINTS_BANDS.windows(2) {
            assert!(pair[0].0 >= pair[1].0);
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn out_of_range_positions_fall_back() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        assert_eq!(points_band(0), None);
        assert_eq!(points_band(21), None);
        assert_eq!(base_points(0, &mut rng), FALLBACK_BASE_POINTS);
        assert_eq!(base_points(25, &mut rng), FALLBACK_BASE_POINTS);
    }

    #[test]
    fn base_points_stay_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for position in 1..=20 {
            let (lo, hi) = points_band(position).unwrap();
            for _ in 0..200 {
                let p = base_points(position, &mut rng);
                assert!((lo..=hi).contains(&p), "pos {position}: {p}");
            }
        }
    }

    #[test]
    fn equal_strength_leaves_base_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        assert_eq!(adjust_for_strength(40, 15, 15.0, &mut rng), 40);
    }

    #[test]
    fn weaker_side_is_penalised_and_floored() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for _ in 0..100 {
            let p = adjust_for_strength(100, 1, 2.1, &mut rng);
            assert!((92..=95).contains(&p), "{p}");
            assert_eq!(adjust_for_strength(16, 19, 20.0, &mut rng), ADJUSTED_FLOOR);
        }
    }

    #[test]
    fn stronger_side_gets_bonus_and_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        for _ in 0..100 {
            let p = adjust_for_strength(40, 10, 3.2, &mut rng);
            assert!((42..=46).contains(&p), "{p}");
            assert_eq!(adjust_for_strength(94, 2, 1.5, &mut rng), ADJUSTED_CAP);
            let low = adjust_for_strength(10, 20, 2.1, &mut rng);
            assert!((ADJUSTED_FLOOR..=16).contains(&low), "{low}");
        }
    }

    #[test]
    fn unknown_team_uses_neutral_strength() {
        let registry = TeamRegistry::premier_league();
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..100 {
            let p = synthesize_points(15, "Hull City", &registry, &mut rng);
            assert!((30..=42).contains(&p), "{p}");
        }
    }
}
