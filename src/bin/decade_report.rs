use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use pl_decade::aggregate;
use pl_decade::config::DecadeConfig;
use pl_decade::export;
use pl_decade::season_table;

const DEFAULT_TOP: usize = 10;

fn main() -> Result<()> {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    if let Some(unknown) = args.iter().find(|a| a.starts_with("--") && !is_known_flag(a)) {
        return Err(anyhow!("unknown flag {unknown}"));
    }

    let mut config = DecadeConfig::from_env()?;
    if let Some(raw) = arg_value(&args, "--seed") {
        config.seed = Some(
            raw.trim()
                .parse::<u64>()
                .with_context(|| format!("parse --seed {raw}"))?,
        );
    }
    let top = match arg_value(&args, "--top") {
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .with_context(|| format!("parse --top {raw}"))?,
        None => DEFAULT_TOP,
    };

    let registry = config.load_registry()?;
    let mut rng = config.rng();
    let records = season_table::generate(&registry, &config.seasons, &mut rng);
    let summary = aggregate::summarize(&records);

    println!("Decade report");
    println!("Seasons: {}", config.seasons.join(", "));
    match config.seed {
        Some(seed) => println!("Seed: {seed}"),
        None => println!("Seed: entropy"),
    }
    println!("Rows generated: {}", records.len());

    let Some(headlines) = aggregate::league_headlines(&summary) else {
        println!("Nothing generated (no seasons or no teams configured)");
        return Ok(());
    };
    println!(
        "Teams {} | Highest points {} | Most seasons {} | Best win rate {:.1}%",
        headlines.total_teams,
        headlines.highest_points,
        headlines.most_seasons,
        headlines.best_win_rate
    );
    println!();
    println!(
        "{:>3}  {:<20} {:>5} {:>4} {:>4} {:>4} {:>4} {:>5} {:>6} {:>5} {:>6}",
        "#", "Team", "Pts", "Seas", "W", "D", "L", "GD", "Avg/S", "PPG", "Win%"
    );
    for (idx, s) in summary.iter().take(top).enumerate() {
        println!(
            "{:>3}  {:<20} {:>5} {:>4} {:>4} {:>4} {:>4} {:>+5} {:>6.1} {:>5.2} {:>6.1}",
            idx + 1,
            s.team,
            s.total_points,
            s.seasons_played,
            s.total_wins,
            s.total_draws,
            s.total_losses,
            s.goal_difference,
            s.avg_points_per_season,
            s.points_per_game,
            s.win_rate
        );
    }

    if let Some(team) = arg_value(&args, "--team") {
        let history = aggregate::team_history(&records, &team);
        println!();
        if history.is_empty() {
            println!("{team}: no seasons in this dataset");
        } else {
            println!("{team} - season by season");
            for r in &history {
                println!(
                    "  {}  pos {:>2}  pts {:>3}  {}-{}-{}  goals {}-{} ({:+})",
                    r.season,
                    r.position,
                    r.points,
                    r.won,
                    r.draw,
                    r.lost,
                    r.goals_for,
                    r.goals_against,
                    r.goal_difference
                );
            }
        }
    }

    if let Some(path) = arg_value(&args, "--xlsx").map(PathBuf::from) {
        let report = export::export_xlsx(&path, &records, &summary)?;
        println!(
            "XLSX: {} ({} teams, {} rows)",
            path.display(),
            report.teams,
            report.season_rows
        );
    }
    if let Some(path) = arg_value(&args, "--json").map(PathBuf::from) {
        let report = export::export_json(&path, &records, &summary)?;
        println!(
            "JSON: {} ({} teams, {} rows)",
            path.display(),
            report.teams,
            report.season_rows
        );
    }

    Ok(())
}

const KNOWN_FLAGS: &[&str] = &["--seed", "--top", "--team", "--xlsx", "--json"];

/// Exact `--flag` or `--flag=value`; `--teamx` is not `--team`.
fn is_known_flag(arg: &str) -> bool {
    KNOWN_FLAGS.iter().any(|flag| match arg.strip_prefix(flag) {
        Some(rest) => rest.is_empty() || rest.starts_with('='),
        None => false,
    })
}

/// Accepts both `--flag value` and `--flag=value`.
fn arg_value(args: &[String], flag: &str) -> Option<String> {
    let prefix = format!("{flag}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix) {
            let trimmed = raw.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(next.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_match_exactly_or_with_value() {
        assert!(is_known_flag("--team"));
        assert!(is_known_flag("--seed=3"));
        assert!(is_known_flag("--json=out/decade.json"));
        assert!(!is_known_flag("--teamx"));
        assert!(!is_known_flag("--seedling"));
        assert!(!is_known_flag("--top-n=5"));
    }
}
