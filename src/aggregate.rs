use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::season_table::SeasonRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSummary {
    pub team: String,
    pub total_points: u32,
    pub total_games: u32,
    pub total_wins: u32,
    pub total_draws: u32,
    pub total_losses: u32,
    pub total_goals_for: u32,
    pub total_goals_against: u32,
    pub seasons_played: u32,
    pub goal_difference: i64,
    pub avg_points_per_season: f64,
    pub points_per_game: f64,
    /// Percentage of games won.
    pub win_rate: f64,
}

#[derive(Debug, Clone, Default)]
struct Totals {
    points: u32,
    games: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: u32,
    goals_against: u32,
    seasons: u32,
}

/// Roll the ground dataset up into one row per team, best total first.
///
/// Teams are grouped in name order and the points sort is stable, so ties
/// keep that order.
pub fn summarize(records: &[SeasonRecord]) -> Vec<TeamSummary> {
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();
    for r in records {
        let t = totals.entry(r.team_name.as_str()).or_default();
        t.points += r.points;
        t.games += r.played_games;
        t.wins += r.won;
        t.draws += r.draw;
        t.losses += r.lost;
        t.goals_for += r.goals_for;
        t.goals_against += r.goals_against;
        t.seasons += 1;
    }

    let mut out: Vec<TeamSummary> = totals
        .into_iter()
        .map(|(team, t)| TeamSummary {
            team: team.to_string(),
            total_points: t.points,
            total_games: t.games,
            total_wins: t.wins,
            total_draws: t.draws,
            total_losses: t.losses,
            total_goals_for: t.goals_for,
            total_goals_against: t.goals_against,
            seasons_played: t.seasons,
            goal_difference: t.goals_for as i64 - t.goals_against as i64,
            avg_points_per_season: round_to(ratio(t.points, t.seasons), 1),
            points_per_game: round_to(ratio(t.points, t.games), 2),
            win_rate: round_to(ratio(t.wins, t.games) * 100.0, 1),
        })
        .collect();

    out.sort_by(|a, b| b.total_points.cmp(&a.total_points));
    out
}

/// Seasons a single team played, oldest first. "YYYY-YY" labels sort
/// chronologically as plain strings.
pub fn team_history(records: &[SeasonRecord], team: &str) -> Vec<SeasonRecord> {
    let mut rows: Vec<SeasonRecord> = records
        .iter()
        .filter(|r| r.team_name == team)
        .cloned()
        .collect();
    rows.sort_by(|a, b| a.season.cmp(&b.season));
    rows
}

/// League-wide figures shown above the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueHeadlines {
    pub total_teams: usize,
    pub highest_points: u32,
    pub most_seasons: u32,
    pub best_win_rate: f64,
}

pub fn league_headlines(summary: &[TeamSummary]) -> Option<LeagueHeadlines> {
    if summary.is_empty() {
        return None;
    }
    Some(LeagueHeadlines {
        total_teams: summary.len(),
        highest_points: summary.iter().map(|s| s.total_points).max().unwrap_or(0),
        most_seasons: summary.iter().map(|s| s.seasons_played).max().unwrap_or(0),
        best_win_rate: summary
            .iter()
            .map(|s| s.win_rate)
            .fold(0.0, f64::max),
    })
}

fn ratio(num: u32, den: u32) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_keeps_requested_places() {
        assert_eq!(round_to(150.0 / 76.0, 2), 1.97);
        assert_eq!(round_to(75.04, 1), 75.0);
        assert_eq!(round_to(33.36, 1), 33.4);
    }

    #[test]
    fn zero_denominator_is_zero_rate() {
        assert_eq!(ratio(10, 0), 0.0);
    }

    #[test]
    fn headlines_absent_without_rows() {
        assert!(league_headlines(&[]).is_none());
    }
}
