use std::collections::VecDeque;
use std::path::PathBuf;

use chrono::Local;
use rand_chacha::ChaCha8Rng;

use crate::aggregate::{self, LeagueHeadlines, TeamSummary};
use crate::config::DecadeConfig;
use crate::export;
use crate::registry::TeamRegistry;
use crate::season_table::{self, SeasonRecord};

const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Summary,
    History { team: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Xlsx,
    Json,
}

/// Session cache for the viewer: the generated dataset and the views derived
/// from it. Generation happens at most once per session.
pub struct AppState {
    pub screen: Screen,
    pub selected: usize,
    pub history_scroll: u16,
    pub help_overlay: bool,
    pub logs: VecDeque<String>,
    pub seasons: Vec<String>,
    pub records: Vec<SeasonRecord>,
    pub summary: Vec<TeamSummary>,
    pub headlines: Option<LeagueHeadlines>,
    pub generated_at: Option<String>,
    export_dir: PathBuf,
    registry: TeamRegistry,
    rng: ChaCha8Rng,
}

impl AppState {
    pub fn new(config: &DecadeConfig, registry: TeamRegistry) -> Self {
        Self {
            screen: Screen::Summary,
            selected: 0,
            history_scroll: 0,
            help_overlay: false,
            logs: VecDeque::with_capacity(MAX_LOGS),
            seasons: config.seasons.clone(),
            records: Vec::new(),
            summary: Vec::new(),
            headlines: None,
            generated_at: None,
            export_dir: config.export_dir.clone(),
            registry,
            rng: config.rng(),
        }
    }

    pub fn is_generated(&self) -> bool {
        self.generated_at.is_some()
    }

    pub fn generate(&mut self) {
        if self.is_generated() {
            self.push_log("[INFO] Dataset already generated for this session");
            return;
        }
        self.records = season_table::generate(&self.registry, &self.seasons, &mut self.rng);
        self.summary = aggregate::summarize(&self.records);
        self.headlines = aggregate::league_headlines(&self.summary);
        self.generated_at = Some(Local::now().format("%H:%M:%S").to_string());
        self.selected = 0;

        if self.records.is_empty() {
            self.push_log("[WARN] Nothing generated (no seasons or no teams configured)");
        } else {
            self.push_log(format!(
                "[INFO] Generated {} seasons, {} rows, {} teams",
                self.seasons.len(),
                self.records.len(),
                self.summary.len()
            ));
        }
    }

    pub fn select_next(&mut self) {
        match self.screen {
            Screen::Summary => {
                if !self.summary.is_empty() {
                    self.selected = (self.selected + 1).min(self.summary.len() - 1);
                }
            }
            Screen::History { .. } => {
                self.history_scroll = self.history_scroll.saturating_add(1);
            }
        }
    }

    pub fn select_prev(&mut self) {
        match self.screen {
            Screen::Summary => self.selected = self.selected.saturating_sub(1),
            Screen::History { .. } => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
            }
        }
    }

    pub fn selected_summary(&self) -> Option<&TeamSummary> {
        self.summary.get(self.selected)
    }

    pub fn open_history(&mut self) {
        let Some(team) = self.selected_summary().map(|s| s.team.clone()) else {
            self.push_log("[INFO] No team selected");
            return;
        };
        self.history_scroll = 0;
        self.push_log(format!("[INFO] History: {team}"));
        self.screen = Screen::History { team };
    }

    pub fn back(&mut self) {
        self.screen = Screen::Summary;
    }

    pub fn history(&self) -> Vec<SeasonRecord> {
        match &self.screen {
            Screen::History { team } => aggregate::team_history(&self.records, team),
            Screen::Summary => Vec::new(),
        }
    }

    pub fn history_summary(&self) -> Option<&TeamSummary> {
        let Screen::History { team } = &self.screen else {
            return None;
        };
        self.summary.iter().find(|s| &s.team == team)
    }

    pub fn export(&mut self, kind: ExportKind) -> Option<PathBuf> {
        if !self.is_generated() {
            self.push_log("[INFO] Generate the dataset before exporting");
            return None;
        }
        let stamp = Local::now().format("%Y%m%d_%H%M%S");
        let (path, result) = match kind {
            ExportKind::Xlsx => {
                let path = self.export_dir.join(format!("pl_decade_{stamp}.xlsx"));
                let result = export::export_xlsx(&path, &self.records, &self.summary);
                (path, result)
            }
            ExportKind::Json => {
                let path = self.export_dir.join(format!("pl_decade_{stamp}.json"));
                let result = export::export_json(&path, &self.records, &self.summary);
                (path, result)
            }
        };
        match result {
            Ok(report) => {
                self.push_log(format!(
                    "[INFO] Exported {} teams / {} rows to {}",
                    report.teams,
                    report.season_rows,
                    path.display()
                ));
                Some(path)
            }
            Err(err) => {
                self.push_log(format!("[WARN] Export failed: {err:#}"));
                None
            }
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }
}
