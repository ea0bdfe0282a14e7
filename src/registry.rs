use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Strength used for teams the registry does not know about (promoted sides etc).
pub const NEUTRAL_STRENGTH: f64 = 15.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamProfile {
    pub name: String,
    pub strong_seasons: u32,
    /// Long-run average finishing position; lower is stronger.
    pub avg_position: f64,
}

/// Static reference data: known teams in registration order plus the pool of
/// sides that rotate in and out of the league.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRegistry {
    pub teams: Vec<TeamProfile>,
    #[serde(default)]
    pub rotating: Vec<String>,
}

impl TeamRegistry {
    pub fn new(teams: Vec<TeamProfile>, rotating: Vec<String>) -> Self {
        Self { teams, rotating }
    }

    pub fn premier_league() -> Self {
        let teams = PREMIER_LEAGUE_TEAMS
            .iter()
            .map(|(name, strong_seasons, avg_position)| TeamProfile {
                name: name.to_string(),
                strong_seasons: *strong_seasons,
                avg_position: *avg_position,
            })
            .collect();
        let rotating = ROTATING_TEAMS.iter().map(|name| name.to_string()).collect();
        Self { teams, rotating }
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        let registry: TeamRegistry =
            serde_json::from_str(raw).context("parse team registry json")?;
        registry.validate()?;
        Ok(registry)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("read team registry {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn profile(&self, name: &str) -> Option<&TeamProfile> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn strength(&self, name: &str) -> f64 {
        self.profile(name)
            .map(|t| t.avg_position)
            .unwrap_or(NEUTRAL_STRENGTH)
    }

    fn validate(&self) -> Result<()> {
        for (idx, team) in self.teams.iter().enumerate() {
            if team.name.trim().is_empty() {
                return Err(anyhow!("team #{idx} has an empty name"));
            }
            if !team.avg_position.is_finite() || team.avg_position <= 0.0 {
                return Err(anyhow!(
                    "team {} has invalid avg_position {}",
                    team.name,
                    team.avg_position
                ));
            }
            if self.teams[..idx].iter().any(|t| t.name == team.name) {
                return Err(anyhow!("duplicate team {}", team.name));
            }
        }
        Ok(())
    }
}

const PREMIER_LEAGUE_TEAMS: &[(&str, u32, f64)] = &[
    ("Manchester City", 8, 2.1),
    ("Manchester United", 6, 4.8),
    ("Liverpool", 8, 3.2),
    ("Chelsea", 7, 4.1),
    ("Arsenal", 6, 5.2),
    ("Tottenham", 7, 5.8),
    ("Leicester City", 6, 9.5),
    ("West Ham", 7, 10.2),
    ("Everton", 8, 10.8),
    ("Newcastle", 6, 11.5),
    ("Brighton", 4, 12.0),
    ("Crystal Palace", 7, 12.5),
    ("Aston Villa", 5, 13.0),
    ("Wolves", 4, 13.5),
    ("Southampton", 7, 14.0),
    ("Burnley", 5, 15.0),
    ("Leeds United", 2, 16.0),
    ("Fulham", 3, 16.5),
    ("Brentford", 2, 17.0),
    ("Norwich City", 2, 18.5),
];

const ROTATING_TEAMS: &[&str] = &[
    "Sheffield United",
    "Watford",
    "Bournemouth",
    "Cardiff City",
    "Huddersfield",
    "Swansea City",
    "Hull City",
    "Middlesbrough",
];
