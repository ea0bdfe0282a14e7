use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::registry::TeamRegistry;

pub const DEFAULT_FIRST_SEASON: i32 = 2014;
pub const DEFAULT_SEASON_COUNT: usize = 10;
const MAX_SEASON_COUNT: usize = 50;
const FIRST_LABEL_YEAR: i32 = 1000;
const LAST_LABEL_YEAR: i32 = 9999;

#[derive(Debug, Clone)]
pub struct DecadeConfig {
    pub seasons: Vec<String>,
    pub seed: Option<u64>,
    pub registry_path: Option<PathBuf>,
    pub export_dir: PathBuf,
}

impl Default for DecadeConfig {
    fn default() -> Self {
        Self {
            seasons: season_labels(DEFAULT_FIRST_SEASON, DEFAULT_SEASON_COUNT),
            seed: None,
            registry_path: None,
            export_dir: PathBuf::from("exports"),
        }
    }
}

impl DecadeConfig {
    /// Load `.env.local`/`.env` (when present) and read `DECADE_*` variables.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");

        let seasons = match opt_env("DECADE_SEASONS") {
            Some(raw) => parse_season_list(&raw)?,
            None => {
                let first = match opt_env("DECADE_FIRST_SEASON") {
                    Some(raw) => raw
                        .trim()
                        .parse::<i32>()
                        .with_context(|| format!("parse DECADE_FIRST_SEASON={raw}"))?,
                    None => DEFAULT_FIRST_SEASON,
                };
                let count = match opt_env("DECADE_SEASON_COUNT") {
                    Some(raw) => parse_season_count(&raw)?,
                    None => DEFAULT_SEASON_COUNT,
                };
                checked_season_labels(first, count)?
            }
        };

        let seed = match opt_env("DECADE_SEED") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u64>()
                    .with_context(|| format!("parse DECADE_SEED={raw}"))?,
            ),
            None => None,
        };

        Ok(Self {
            seasons,
            seed,
            registry_path: opt_env("DECADE_REGISTRY").map(PathBuf::from),
            export_dir: opt_env("DECADE_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("exports")),
        })
    }

    pub fn load_registry(&self) -> Result<TeamRegistry> {
        match &self.registry_path {
            Some(path) => TeamRegistry::from_json_file(path),
            None => Ok(TeamRegistry::premier_league()),
        }
    }

    /// Seeded when configured, otherwise fresh entropy for every run.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// `count` consecutive labels starting with the season that opens in `first_year`.
pub fn season_labels(first_year: i32, count: usize) -> Vec<String> {
    (0..count)
        .map(|offset| format_season(first_year + offset as i32))
        .collect()
}

/// Like [`season_labels`], but every label must be a four-digit "YYYY-YY".
pub fn checked_season_labels(first_year: i32, count: usize) -> Result<Vec<String>> {
    let last_year = i32::try_from(count.saturating_sub(1))
        .ok()
        .and_then(|span| first_year.checked_add(span))
        .ok_or_else(|| anyhow!("invalid season label: {count} seasons from {first_year}"))?;
    for year in [first_year, last_year] {
        if !(FIRST_LABEL_YEAR..=LAST_LABEL_YEAR).contains(&year) {
            return Err(anyhow!("invalid season label: start year {year} is not four digits"));
        }
    }
    let labels = season_labels(first_year, count);
    for label in &labels {
        parse_season_label(label)?;
    }
    Ok(labels)
}

/// Parsed and clamped to `1..=50`; garbage is an error, not the default.
pub fn parse_season_count(raw: &str) -> Result<usize> {
    let count = raw
        .trim()
        .parse::<usize>()
        .with_context(|| format!("parse DECADE_SEASON_COUNT={raw}"))?;
    Ok(count.clamp(1, MAX_SEASON_COUNT))
}

pub fn format_season(start_year: i32) -> String {
    format!("{}-{:02}", start_year, (start_year + 1).rem_euclid(100))
}

/// Validate a "YYYY-YY" label and return the year the season starts in.
pub fn parse_season_label(raw: &str) -> Result<i32> {
    let label = raw.trim();
    let (start, end) = label
        .split_once('-')
        .ok_or_else(|| anyhow!("invalid season label {label:?}: expected YYYY-YY"))?;
    if start.len() != 4 || end.len() != 2 {
        return Err(anyhow!("invalid season label {label:?}: expected YYYY-YY"));
    }
    let start_year: i32 = start
        .parse()
        .with_context(|| format!("invalid season label {label:?}"))?;
    let end_short: i32 = end
        .parse()
        .with_context(|| format!("invalid season label {label:?}"))?;

    let opens = NaiveDate::from_ymd_opt(start_year, 8, 1)
        .ok_or_else(|| anyhow!("invalid season label {label:?}: bad year"))?;
    let closes = opens
        .with_year(start_year + 1)
        .ok_or_else(|| anyhow!("invalid season label {label:?}: bad year"))?;
    if closes.year().rem_euclid(100) != end_short {
        return Err(anyhow!(
            "invalid season label {label:?}: second year should be {:02}",
            closes.year().rem_euclid(100)
        ));
    }
    Ok(start_year)
}

pub fn parse_season_list(raw: &str) -> Result<Vec<String>> {
    raw.split([',', ';', ' '])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_season_label(part).map(format_season))
        .collect()
}

fn opt_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .and_then(|val| if val.trim().is_empty() { None } else { Some(val) })
}
