use log::error;
use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState, Tabs};
use tui::{Frame, Terminal};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{App, MenuItem};
use crate::state::app_state::{BoxSection, SortColumn, player_table};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;
use sportsboard_api::{BoxScoreRecord, GameStatus};

static TABS: &[&str; 3] = &["Scores", "Box Score", "Help"];

const HELP_TEXT: &str = "\
Scores
  [ / ]        previous / next league
  h / l        previous / next day
  t            jump to today
  r            refresh
  s            cycle status filter (All, Live, Scheduled, Final)
  1-7          sort by column, again to reverse
  j / k        move selection
  Enter        load box score for the selected game

Box Score
  Tab          switch between team stats and player stats
  j / k        scroll
  Esc          back to scores

Global
  F1 / F2      Scores / Box Score tab
  ?            this help (Esc to close)
  f            toggle full screen
  \"            toggle log pane
  q            quit";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
        }

        match app.state.active_tab {
            MenuItem::Scores => draw_scores(f, layout.main, app),
            MenuItem::BoxScore => draw_box_score(f, layout.main, app),
            MenuItem::Help => draw_help(f, layout.main),
        }

        if let Some(logs) = layout.logs {
            draw_logs(f, logs);
        }
        draw_status_line(f, layout.status, app);
        draw_loading_spinner(f, f.area(), app, loading);
    });

    if let Err(e) = result {
        error!("Failed to draw frame: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Scores => 0,
        MenuItem::BoxScore => 1,
        MenuItem::Help => 2,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_scores(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(format!(" {} ", app.state.league.label()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [header, key_legend, content] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Fill(1)]).areas(inner);

    let scoreboard = &app.state.scoreboard;
    let sort_label = match scoreboard.sort {
        Some(order) => format!("{}{}", order.column.label(), if order.reverse { " (desc)" } else { "" }),
        None => "none".to_string(),
    };
    let header_text = format!(
        "{} | {} | Filter: {} | Sort: {}",
        app.state.league.label(),
        app.state.date.format("%a %Y-%m-%d"),
        scoreboard.filter.label(),
        sort_label
    );
    f.render_widget(Paragraph::new(header_text), header);
    f.render_widget(
        Paragraph::new("Keys: [/]=league  h/l=day  t=today  s=filter  1-7=sort  j/k=move  Enter=box score")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    if let Some(message) = scoreboard.empty_message() {
        f.render_widget(
            Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            content,
        );
        return;
    }

    let header_row = Row::new(SortColumn::ALL.iter().enumerate().map(|(idx, column)| {
        let mut label = format!("{} {}", idx + 1, column.label());
        if let Some(order) = scoreboard.sort
            && order.column == *column
        {
            label.push(if order.reverse { '▼' } else { '▲' });
        }
        Cell::from(label)
    }))
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = scoreboard.visible_games().into_iter().map(|game| {
        Row::new(SortColumn::ALL.iter().map(|column| {
            let text = column.cell(game);
            match column {
                SortColumn::Status => Cell::from(text).style(status_style(game.status)),
                _ => Cell::from(text),
            }
        }))
    });

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(3),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(11),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header_row)
        .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Yellow))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(Some(scoreboard.selected));
    f.render_stateful_widget(table, content, &mut table_state);
}

fn status_style(status: GameStatus) -> Style {
    match status {
        GameStatus::Live => Style::default().fg(Color::Green),
        GameStatus::Final => Style::default().fg(Color::Gray),
        GameStatus::Scheduled => Style::default().fg(Color::Cyan),
    }
}

fn draw_box_score(f: &mut Frame, area: Rect, app: &App) {
    let box_score = &app.state.box_score;
    let title = match box_score.section {
        BoxSection::TeamStats => " Box Score: Team Stats ",
        BoxSection::PlayerStats => " Box Score: Player Stats ",
    };
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(record) = box_score.record.as_ref() else {
        let msg = if let Some(err) = app.state.last_error.as_deref()
            && box_score.game_id.is_some()
        {
            format!("{}\n\nBox score load failed:\n{err}", box_score.label)
        } else if box_score.game_id.is_some() {
            format!("{}\n\nLoading box score...", box_score.label)
        } else {
            "Select a game on the Scores tab and press Enter".to_string()
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let mut lines = vec![
        Line::from(Span::styled(box_score.label.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
    ];
    for team in &record.teams {
        lines.push(Line::from(format!("{} ({}): {}", team.name, team.home_away, team.score)));
    }
    lines.push(Line::from(""));

    match box_score.section {
        BoxSection::TeamStats => lines.extend(team_stats_lines(record)),
        BoxSection::PlayerStats => lines.extend(player_stats_lines(record)),
    }

    f.render_widget(Paragraph::new(lines).scroll((box_score.scroll_offset, 0)), inner);
}

fn team_stats_lines(record: &BoxScoreRecord) -> Vec<Line<'static>> {
    if record.team_stats.is_empty() {
        return vec![dim_line("No team statistics available.")];
    }

    let mut lines = Vec::new();
    for team in &record.team_stats {
        lines.push(section_title(&team.team));
        let rows: Vec<Vec<String>> = team
            .stats
            .iter()
            .map(|s| vec![s.name.clone(), s.display_value.clone()])
            .collect();
        lines.extend(text_table(&["Stat".to_string(), "Value".to_string()], &rows));
        lines.push(Line::from(""));
    }
    lines
}

fn player_stats_lines(record: &BoxScoreRecord) -> Vec<Line<'static>> {
    if record.player_stats.is_empty() {
        return vec![dim_line("Player statistics not available for this game.")];
    }

    let mut lines = Vec::new();
    for team in &record.player_stats {
        if team.categories.is_empty() {
            lines.push(section_title(&team.team));
            lines.push(dim_line("No player statistics."));
            lines.push(Line::from(""));
            continue;
        }
        for category in &team.categories {
            let table = player_table(&team.team, category);
            lines.push(section_title(&table.title));
            if table.rows.is_empty() {
                lines.push(dim_line("No players listed."));
            } else {
                lines.extend(text_table(&table.columns, &table.rows));
            }
            lines.push(Line::from(""));
        }
    }
    lines
}

fn section_title(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))
}

fn dim_line(text: &str) -> Line<'static> {
    Line::from(Span::styled(text.to_string(), Style::default().fg(Color::DarkGray)))
}

/// Left-aligned columns padded to the widest cell, header underlined.
fn text_table(columns: &[String], rows: &[Vec<String>]) -> Vec<Line<'static>> {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.chars().count()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            match widths.get_mut(idx) {
                Some(w) => *w = (*w).max(len),
                None => widths.push(len),
            }
        }
    }

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| format!("{cell:<width$}", width = widths[idx]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(Line::from(Span::styled(
        format_row(columns),
        Style::default().add_modifier(Modifier::UNDERLINED),
    )));
    lines.extend(rows.iter().map(|row| Line::from(format_row(row))));
    lines
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(Paragraph::new(HELP_TEXT), inner);
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Cyan))
        .style_debug(Style::default().fg(Color::Green))
        .style_trace(Style::default().fg(Color::Magenta));
    f.render_widget(logs, area);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let status = match app.state.last_error.as_deref() {
        Some(err) => Paragraph::new(format!(" {err}")).style(Style::default().fg(Color::Red)),
        None => Paragraph::new(" q=quit  ?=help  \"=logs").style(Style::default().fg(Color::DarkGray)),
    };
    f.render_widget(status, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
