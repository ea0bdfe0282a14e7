use pl_decade::match_record::GAMES_PER_SEASON;
use pl_decade::{SeasonRecord, league_headlines, summarize, team_history};

fn record(team: &str, season: &str, position: u32, won: u32, draw: u32) -> SeasonRecord {
    let lost = GAMES_PER_SEASON - won - draw;
    let goals_for = 40 + won;
    let goals_against = 30 + lost;
    SeasonRecord {
        team_name: team.to_string(),
        season: season.to_string(),
        position,
        points: won * 3 + draw,
        played_games: GAMES_PER_SEASON,
        won,
        draw,
        lost,
        goals_for,
        goals_against,
        goal_difference: goals_for as i32 - goals_against as i32,
    }
}

#[test]
fn two_season_team_totals_and_rates() {
    // 80 = 25*3 + 5, 70 = 22*3 + 4
    let records = vec![
        record("Team A", "2015-16", 2, 25, 5),
        record("Team B", "2015-16", 9, 12, 10),
        record("Team A", "2014-15", 3, 22, 4),
    ];
    let summary = summarize(&records);
    let a = summary.iter().find(|s| s.team == "Team A").unwrap();

    assert_eq!(a.total_points, 150);
    assert_eq!(a.seasons_played, 2);
    assert_eq!(a.total_games, 76);
    assert_eq!(a.total_wins, 47);
    assert_eq!(a.total_draws, 9);
    assert_eq!(a.total_losses, 20);
    assert_eq!(a.avg_points_per_season, 75.0);
    assert_eq!(a.points_per_game, 1.97);
    assert_eq!(a.win_rate, 61.8);
    assert_eq!(
        a.goal_difference,
        a.total_goals_for as i64 - a.total_goals_against as i64
    );
}

#[test]
fn summary_sorted_by_points_and_stable_on_ties() {
    let records = vec![
        record("Zeta", "2014-15", 1, 20, 0),
        record("Alpha", "2014-15", 2, 20, 0),
        record("Mid", "2014-15", 3, 10, 0),
        record("Top", "2014-15", 4, 30, 0),
    ];
    let teams: Vec<String> = summarize(&records).into_iter().map(|s| s.team).collect();
    // Alpha and Zeta tie on 60; name order is kept.
    assert_eq!(teams, vec!["Top", "Alpha", "Zeta", "Mid"]);
}

#[test]
fn summary_totals_match_the_ground_rows() {
    let records = vec![
        record("A", "2014-15", 1, 28, 4),
        record("B", "2014-15", 2, 20, 8),
        record("A", "2015-16", 2, 21, 6),
        record("B", "2015-16", 1, 27, 5),
        record("A", "2016-17", 5, 15, 9),
    ];
    for s in summarize(&records) {
        let rows: Vec<&SeasonRecord> = records.iter().filter(|r| r.team_name == s.team).collect();
        assert_eq!(s.total_points, rows.iter().map(|r| r.points).sum::<u32>());
        assert_eq!(s.seasons_played as usize, rows.len());
    }
}

#[test]
fn summarize_is_idempotent_and_leaves_input_alone() {
    let records = vec![
        record("A", "2014-15", 1, 28, 4),
        record("B", "2014-15", 2, 20, 8),
    ];
    let before = records.clone();
    assert_eq!(summarize(&records), summarize(&records));
    assert_eq!(records, before);
}

#[test]
fn empty_dataset_gives_empty_views() {
    assert!(summarize(&[]).is_empty());
    assert!(team_history(&[], "A").is_empty());
    assert!(league_headlines(&summarize(&[])).is_none());
}

#[test]
fn history_is_chronological_and_filtered() {
    let records = vec![
        record("A", "2019-20", 4, 20, 5),
        record("B", "2014-15", 1, 28, 4),
        record("A", "2014-15", 6, 18, 8),
        record("A", "2016-17", 7, 16, 9),
    ];
    let history = team_history(&records, "A");
    let seasons: Vec<&str> = history.iter().map(|r| r.season.as_str()).collect();
    assert_eq!(seasons, vec!["2014-15", "2016-17", "2019-20"]);
    assert!(history.iter().all(|r| r.team_name == "A"));
    assert!(team_history(&records, "Never Promoted").is_empty());
}

#[test]
fn headlines_pick_the_league_bests() {
    let records = vec![
        record("A", "2014-15", 1, 30, 2),
        record("A", "2015-16", 2, 20, 2),
        record("B", "2014-15", 2, 25, 5),
    ];
    let h = league_headlines(&summarize(&records)).unwrap();
    assert_eq!(h.total_teams, 2);
    assert_eq!(h.highest_points, 154);
    assert_eq!(h.most_seasons, 2);
    // A wins 50 of 76, B 25 of 38; both round to 65.8
    assert_eq!(h.best_win_rate, 65.8);
}
