use rand::Rng;
use rand::seq::SliceRandom;

use crate::registry::TeamRegistry;

pub const CORE_TEAMS: usize = 16;
pub const ROTATING_SLOTS: usize = 4;
pub const LEAGUE_SIZE: usize = CORE_TEAMS + ROTATING_SLOTS;

/// Pick the teams competing in `season`: the first [`CORE_TEAMS`] registered
/// teams plus [`ROTATING_SLOTS`] drawn without replacement from the rotating pool.
///
/// The rotating subset is re-sampled on every call, so asking twice for the
/// same season can give two different rosters. Seed the rng to reproduce one.
pub fn select_season_roster(
    registry: &TeamRegistry,
    _season: &str,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut roster: Vec<String> = registry
        .teams
        .iter()
        .take(CORE_TEAMS)
        .map(|t| t.name.clone())
        .collect();
    if roster.is_empty() {
        return roster;
    }

    let candidates: Vec<&String> = registry
        .rotating
        .iter()
        .filter(|name| !roster.contains(*name))
        .collect();
    let picked: Vec<String> = candidates
        .choose_multiple(rng, ROTATING_SLOTS)
        .map(|name| (*name).clone())
        .collect();
    roster.extend(picked);
    roster.truncate(LEAGUE_SIZE);
    roster
}
