pub mod aggregate;
pub mod config;
pub mod export;
pub mod match_record;
pub mod points;
pub mod registry;
pub mod roster;
pub mod season_table;
pub mod state;

pub use aggregate::{LeagueHeadlines, TeamSummary, league_headlines, summarize, team_history};
pub use registry::{TeamProfile, TeamRegistry};
pub use season_table::{SeasonRecord, generate};
