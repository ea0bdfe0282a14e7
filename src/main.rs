use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use pl_decade::config::DecadeConfig;
use pl_decade::state::{AppState, ExportKind, Screen};

struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('g') | KeyCode::Char('G') => self.state.generate(),
            KeyCode::Char('d') | KeyCode::Enter => {
                if self.state.screen == Screen::Summary {
                    self.state.open_history();
                }
            }
            KeyCode::Char('b') | KeyCode::Esc => self.state.back(),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Char('x') => {
                self.state.export(ExportKind::Xlsx);
            }
            KeyCode::Char('J') => {
                self.state.export(ExportKind::Json);
            }
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            _ => {}
        }
    }
}

fn main() -> anyhow::Result<()> {
    let config = DecadeConfig::from_env()?;
    let registry = config.load_registry()?;
    let mut state = AppState::new(&config, registry);
    match config.seed {
        Some(seed) => state.push_log(format!("[INFO] Seed {seed}")),
        None => state.push_log("[INFO] Unseeded run; press g to generate"),
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(state);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    match &app.state.screen {
        Screen::Summary => render_summary(frame, chunks[1], &app.state),
        Screen::History { team } => render_history(frame, chunks[1], &app.state, team),
    }

    let console = Paragraph::new(console_text(&app.state))
        .block(Block::default().title("Console").borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(console, chunks[2]);

    let footer = Paragraph::new(footer_text(&app.state));
    frame.render_widget(footer, chunks[3]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let span = match (state.seasons.first(), state.seasons.last()) {
        (Some(first), Some(last)) => format!("{first} to {last}"),
        _ => "no seasons".to_string(),
    };
    let title = match &state.screen {
        Screen::Summary => format!("PL DECADE | {} seasons ({span})", state.seasons.len()),
        Screen::History { team } => format!("PL DECADE | {team} | season by season"),
    };
    let line2 = match &state.headlines {
        Some(h) => format!(
            "Teams {} | Highest Points {} | Most Seasons {} | Best Win Rate {:.1}%",
            h.total_teams, h.highest_points, h.most_seasons, h.best_win_rate
        ),
        None => "Press g to generate the analysis".to_string(),
    };
    let line3 = match &state.generated_at {
        Some(at) => format!("Generated at {at}"),
        None => String::new(),
    };
    format!("{title}\n{line2}\n{line3}")
}

fn footer_text(state: &AppState) -> String {
    match state.screen {
        Screen::Summary => {
            "g Generate | Enter/d History | j/k/↑/↓ Move | x XLSX | J JSON | ? Help | q Quit"
                .to_string()
        }
        Screen::History { .. } => {
            "b/Esc Back | j/k/↑/↓ Scroll | x XLSX | J JSON | ? Help | q Quit".to_string()
        }
    }
}

fn summary_columns() -> [Constraint; 11] {
    [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Length(7),
    ]
}

fn render_summary(frame: &mut Frame, area: Rect, state: &AppState) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let widths = summary_columns();
    render_row(
        frame,
        sections[0],
        &widths,
        &["#", "Team", "Pts", "Seas", "W", "D", "L", "GD", "Avg/S", "PPG", "Win%"],
        Style::default().add_modifier(Modifier::BOLD),
    );

    let list_area = sections[1];
    if state.summary.is_empty() {
        let msg = if state.is_generated() {
            "No teams in the generated dataset"
        } else {
            "No data yet"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, list_area);
        return;
    }

    let visible = list_area.height as usize;
    let (start, end) = visible_range(state.selected, state.summary.len(), visible);
    for (i, idx) in (start..end).enumerate() {
        let row_area = Rect {
            x: list_area.x,
            y: list_area.y + i as u16,
            width: list_area.width,
            height: 1,
        };
        let style = if idx == state.selected {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else {
            Style::default()
        };
        let s = &state.summary[idx];
        let cells = [
            (idx + 1).to_string(),
            s.team.clone(),
            s.total_points.to_string(),
            s.seasons_played.to_string(),
            s.total_wins.to_string(),
            s.total_draws.to_string(),
            s.total_losses.to_string(),
            format!("{:+}", s.goal_difference),
            format!("{:.1}", s.avg_points_per_season),
            format!("{:.2}", s.points_per_game),
            format!("{:.1}", s.win_rate),
        ];
        let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
        render_row(frame, row_area, &widths, &cells, style);
    }
}

fn history_columns() -> [Constraint; 9] {
    [
        Constraint::Length(9),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
        Constraint::Length(5),
        Constraint::Length(6),
    ]
}

fn render_history(frame: &mut Frame, area: Rect, state: &AppState, team: &str) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(50), Constraint::Length(28)])
        .split(area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(columns[0]);

    let widths = history_columns();
    render_row(
        frame,
        sections[0],
        &widths,
        &["Season", "Pos", "Pts", "W", "D", "L", "GF", "GA", "GD"],
        Style::default().add_modifier(Modifier::BOLD),
    );

    let rows = state.history();
    if rows.is_empty() {
        let empty = Paragraph::new(format!("{team} never appeared"))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, sections[1]);
    } else {
        let list_area = sections[1];
        let visible = list_area.height as usize;
        let max_start = rows.len().saturating_sub(visible);
        let start = (state.history_scroll as usize).min(max_start);
        let end = (start + visible).min(rows.len());
        for (i, r) in rows[start..end].iter().enumerate() {
            let row_area = Rect {
                x: list_area.x,
                y: list_area.y + i as u16,
                width: list_area.width,
                height: 1,
            };
            let cells = [
                r.season.clone(),
                r.position.to_string(),
                r.points.to_string(),
                r.won.to_string(),
                r.draw.to_string(),
                r.lost.to_string(),
                r.goals_for.to_string(),
                r.goals_against.to_string(),
                format!("{:+}", r.goal_difference),
            ];
            let cells: Vec<&str> = cells.iter().map(String::as_str).collect();
            render_row(frame, row_area, &widths, &cells, Style::default());
        }
    }

    let stats = Paragraph::new(team_stats_text(state))
        .block(Block::default().title("Totals").borders(Borders::ALL));
    frame.render_widget(stats, columns[1]);
}

fn team_stats_text(state: &AppState) -> String {
    match state.history_summary() {
        Some(s) => [
            format!("Total Points  {}", s.total_points),
            format!("Avg/Season    {:.1}", s.avg_points_per_season),
            format!("Win Rate      {:.1}%", s.win_rate),
            format!("Seasons       {}", s.seasons_played),
            format!("Goals         {}-{}", s.total_goals_for, s.total_goals_against),
        ]
        .join("\n"),
        None => "No totals".to_string(),
    }
}

fn render_row(
    frame: &mut Frame,
    area: Rect,
    widths: &[Constraint],
    cells: &[&str],
    style: Style,
) {
    if style.bg.is_some() {
        frame.render_widget(Block::default().style(style), area);
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(widths)
        .split(area);
    for (col, text) in cols.iter().zip(cells) {
        frame.render_widget(Paragraph::new(*text).style(style), *col);
    }
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn console_text(state: &AppState) -> String {
    if state.logs.is_empty() {
        return "Nothing logged yet".to_string();
    }
    state
        .logs
        .iter()
        .rev()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "PL Decade - Help",
        "",
        "Global:",
        "  g            Generate (once per session)",
        "  x            Export XLSX",
        "  J            Export JSON",
        "  ?            Toggle help",
        "  q            Quit",
        "",
        "Summary:",
        "  j/k or ↑/↓   Move",
        "  Enter / d    Team history",
        "",
        "History:",
        "  j/k or ↑/↓   Scroll",
        "  b / Esc      Back",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
