use rand::Rng;

pub const GAMES_PER_SEASON: u32 = 38;
/// Every game won.
pub const MAX_POINTS: u32 = GAMES_PER_SEASON * 3;
pub const MIN_GOALS: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Results {
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Results {
    pub fn points(&self) -> u32 {
        self.wins * 3 + self.draws
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }
}

/// Split a raw points total into a W/D/L line over a full season.
///
/// The jitter shaves up to 8 points before converting to wins so not every
/// side ends on an all-or-nothing record. The returned line is authoritative:
/// `results.points()` may be lower than `points`.
pub fn decompose_points(points: u32, rng: &mut impl Rng) -> Results {
    let jitter = rng.gen_range(0..=8);
    let wins = (points.saturating_sub(jitter) / 3).min(GAMES_PER_SEASON);
    let remaining = points.saturating_sub(wins * 3);
    let draws = remaining.min(GAMES_PER_SEASON - wins);
    let losses = GAMES_PER_SEASON - wins - draws;
    Results {
        wins,
        draws,
        losses,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTier {
    TopFour,
    UpperHalf,
    MidTable,
    Bottom,
}

impl GoalTier {
    pub fn for_position(position: u32) -> Self {
        match position {
            1..=4 => GoalTier::TopFour,
            5..=10 => GoalTier::UpperHalf,
            11..=15 => GoalTier::MidTable,
            _ => GoalTier::Bottom,
        }
    }

    /// Inclusive (goals for, goals against) base ranges.
    pub fn base_ranges(self) -> ((u32, u32), (u32, u32)) {
        match self {
            GoalTier::TopFour => ((65, 85), (25, 45)),
            GoalTier::UpperHalf => ((45, 68), (35, 55)),
            GoalTier::MidTable => ((35, 55), (45, 65)),
            GoalTier::Bottom => ((25, 45), (55, 85)),
        }
    }
}

/// Goals for/against from the position tier, scaled by how well the season went.
pub fn synthesize_goals(position: u32, results: Results, rng: &mut impl Rng) -> (u32, u32) {
    let ((gf_lo, gf_hi), (ga_lo, ga_hi)) = GoalTier::for_position(position).base_ranges();
    let gf = rng.gen_range(gf_lo..=gf_hi) as f64;
    let ga = rng.gen_range(ga_lo..=ga_hi) as f64;

    let factor = results.points() as f64 / MAX_POINTS as f64;
    let goals_for = (gf * (0.7 + factor * 0.6)) as u32;
    let goals_against = (ga * (1.3 - factor * 0.6)) as u32;

    (goals_for.max(MIN_GOALS), goals_against.max(MIN_GOALS))
}
