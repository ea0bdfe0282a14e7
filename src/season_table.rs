use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::match_record::{self, GAMES_PER_SEASON};
use crate::points;
use crate::registry::TeamRegistry;
use crate::roster;

/// One team's final line in one season.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRecord {
    pub team_name: String,
    pub season: String,
    pub position: u32,
    pub points: u32,
    pub played_games: u32,
    pub won: u32,
    pub draw: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i32,
}

pub fn build_season_table(
    registry: &TeamRegistry,
    season: &str,
    rng: &mut impl Rng,
) -> Vec<SeasonRecord> {
    let teams = roster::select_season_roster(registry, season, rng);
    let mut table = Vec::with_capacity(teams.len());

    for (idx, team) in teams.into_iter().enumerate() {
        let position = idx as u32 + 1;
        let raw_points = points::synthesize_points(position, &team, registry, rng);
        let results = match_record::decompose_points(raw_points, rng);
        let (goals_for, goals_against) = match_record::synthesize_goals(position, results, rng);

        table.push(SeasonRecord {
            team_name: team,
            season: season.to_string(),
            position,
            points: results.points(),
            played_games: GAMES_PER_SEASON,
            won: results.wins,
            draw: results.draws,
            lost: results.losses,
            goals_for,
            goals_against,
            goal_difference: goals_for as i32 - goals_against as i32,
        });
    }

    table
}

/// Build every season in order and flatten them into the ground dataset.
/// Seasons are independent of each other.
pub fn generate<S: AsRef<str>>(
    registry: &TeamRegistry,
    seasons: &[S],
    rng: &mut impl Rng,
) -> Vec<SeasonRecord> {
    let mut all = Vec::with_capacity(seasons.len() * roster::LEAGUE_SIZE);
    for season in seasons {
        all.extend(build_season_table(registry, season.as_ref(), rng));
    }
    all
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn season_rows_carry_label_and_positions() {
        let registry = TeamRegistry::premier_league();
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        let table = build_season_table(&registry, "2017-18", &mut rng);

        assert_eq!(table.len(), 20);
        for (idx, row) in table.iter().enumerate() {
            assert_eq!(row.position, idx as u32 + 1);
            assert_eq!(row.season, "2017-18");
            assert_eq!(row.points, row.won * 3 + row.draw);
        }
    }

    #[test]
    fn empty_inputs_give_empty_dataset() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let none: &[&str] = &[];
        assert!(generate(&TeamRegistry::premier_league(), none, &mut rng).is_empty());
        assert!(generate(&TeamRegistry::default(), &["2014-15"], &mut rng).is_empty());
    }
}
