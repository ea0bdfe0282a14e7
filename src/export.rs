use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rust_xlsxwriter::{Workbook, Worksheet};
use serde::Serialize;

use crate::aggregate::{self, LeagueHeadlines, TeamSummary};
use crate::season_table::SeasonRecord;

#[derive(Debug)]
pub struct ExportReport {
    pub teams: usize,
    pub season_rows: usize,
}

const SUMMARY_HEADER: [&str; 14] = [
    "Rank",
    "Team",
    "Total Points",
    "Total Games",
    "Total Wins",
    "Total Draws",
    "Total Losses",
    "Goals For",
    "Goals Against",
    "Seasons Played",
    "Goal Difference",
    "Avg Points/Season",
    "Points/Game",
    "Win Rate %",
];

const SEASON_HEADER: [&str; 11] = [
    "Season",
    "Position",
    "Team",
    "Points",
    "Played",
    "Wins",
    "Draws",
    "Losses",
    "Goals For",
    "Goals Against",
    "Goal Diff",
];

pub fn export_xlsx(
    path: &Path,
    records: &[SeasonRecord],
    summary: &[TeamSummary],
) -> Result<ExportReport> {
    ensure_parent(path)?;
    let mut workbook = Workbook::new();

    let mut summary_rows = vec![header_row(&SUMMARY_HEADER)];
    summary_rows.extend(
        summary
            .iter()
            .enumerate()
            .map(|(idx, row)| summary_row(idx + 1, row)),
    );
    let sheet = workbook.add_worksheet();
    sheet.set_name("Summary").context("name summary sheet")?;
    write_rows(sheet, &summary_rows)?;

    let mut season_rows = vec![header_row(&SEASON_HEADER)];
    season_rows.extend(records.iter().map(season_row));
    let sheet = workbook.add_worksheet();
    sheet.set_name("Seasons").context("name seasons sheet")?;
    write_rows(sheet, &season_rows)?;

    let mut info_rows = vec![vec!["Generated".to_string(), Utc::now().to_rfc3339()]];
    if let Some(h) = aggregate::league_headlines(summary) {
        info_rows.extend(headline_rows(&h));
    }
    let sheet = workbook.add_worksheet();
    sheet.set_name("Info").context("name info sheet")?;
    write_rows(sheet, &info_rows)?;

    workbook
        .save(path)
        .with_context(|| format!("save workbook {}", path.display()))?;

    Ok(ExportReport {
        teams: summary.len(),
        season_rows: records.len(),
    })
}

#[derive(Serialize)]
struct JsonExport<'a> {
    generated_at: String,
    headlines: Option<LeagueHeadlines>,
    summary: &'a [TeamSummary],
    seasons: &'a [SeasonRecord],
}

pub fn export_json(
    path: &Path,
    records: &[SeasonRecord],
    summary: &[TeamSummary],
) -> Result<ExportReport> {
    ensure_parent(path)?;
    let doc = JsonExport {
        generated_at: Utc::now().to_rfc3339(),
        headlines: aggregate::league_headlines(summary),
        summary,
        seasons: records,
    };
    let json = serde_json::to_string_pretty(&doc).context("serialize decade export")?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json).context("write decade export")?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err).context("swap decade export");
    }
    Ok(ExportReport {
        teams: summary.len(),
        season_rows: records.len(),
    })
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create export dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn header_row(cols: &[&str]) -> Vec<String> {
    cols.iter().map(|c| c.to_string()).collect()
}

fn summary_row(rank: usize, row: &TeamSummary) -> Vec<String> {
    vec![
        rank.to_string(),
        row.team.clone(),
        row.total_points.to_string(),
        row.total_games.to_string(),
        row.total_wins.to_string(),
        row.total_draws.to_string(),
        row.total_losses.to_string(),
        row.total_goals_for.to_string(),
        row.total_goals_against.to_string(),
        row.seasons_played.to_string(),
        row.goal_difference.to_string(),
        format!("{:.1}", row.avg_points_per_season),
        format!("{:.2}", row.points_per_game),
        format!("{:.1}", row.win_rate),
    ]
}

fn season_row(row: &SeasonRecord) -> Vec<String> {
    vec![
        row.season.clone(),
        row.position.to_string(),
        row.team_name.clone(),
        row.points.to_string(),
        row.played_games.to_string(),
        row.won.to_string(),
        row.draw.to_string(),
        row.lost.to_string(),
        row.goals_for.to_string(),
        row.goals_against.to_string(),
        row.goal_difference.to_string(),
    ]
}

fn headline_rows(h: &LeagueHeadlines) -> Vec<Vec<String>> {
    vec![
        vec!["Total Teams".to_string(), h.total_teams.to_string()],
        vec!["Highest Points".to_string(), h.highest_points.to_string()],
        vec!["Most Seasons".to_string(), h.most_seasons.to_string()],
        vec!["Best Win Rate".to_string(), format!("{:.1}%", h.best_win_rate)],
    ]
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, value) in row.iter().enumerate() {
            worksheet
                .write_string(row_idx as u32, col_idx as u16, value)
                .with_context(|| format!("write cell ({row_idx},{col_idx})"))?;
        }
    }
    Ok(())
}
