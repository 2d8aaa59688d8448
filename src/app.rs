use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, SortColumn, game_label};
use crate::state::messages::NetworkRequest;
use chrono::{Days, NaiveDate};
use sportsboard_api::client::today_eastern;
use sportsboard_api::{BoxScoreRecord, GameRecord, League};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Scores,
    BoxScore,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            state: AppState::new(settings.league, settings.date),
            settings,
        }
    }

    // -----------------------------------------------------------------------
    // Network response handlers, called from main_ui_loop
    // -----------------------------------------------------------------------

    /// Responses for a league/date the user has since moved away from are dropped.
    pub fn on_scores_loaded(&mut self, league: League, date: NaiveDate, games: Vec<GameRecord>) {
        if (league, date) != (self.state.league, self.state.date) {
            return;
        }
        self.state.last_error = None;
        self.state.scoreboard.load(league, date, games);
    }

    /// Only the most recently requested game is shown.
    pub fn on_box_score_loaded(&mut self, game_id: String, label: String, record: BoxScoreRecord) {
        if !self.state.box_score.is_pending(&game_id) {
            return;
        }
        self.state.last_error = None;
        self.state.box_score.load(game_id, label, record);
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // League and date selection; each change returns a fresh scores request
    // -----------------------------------------------------------------------

    pub fn scores_request(&self) -> NetworkRequest {
        NetworkRequest::LoadScores {
            league: self.state.league,
            date: self.state.date,
        }
    }

    pub fn next_league(&mut self) -> NetworkRequest {
        self.state.league = self.state.league.next();
        self.scores_request()
    }

    pub fn prev_league(&mut self) -> NetworkRequest {
        self.state.league = self.state.league.prev();
        self.scores_request()
    }

    pub fn next_day(&mut self) -> NetworkRequest {
        if let Some(date) = self.state.date.checked_add_days(Days::new(1)) {
            self.state.date = date;
        }
        self.scores_request()
    }

    pub fn prev_day(&mut self) -> NetworkRequest {
        if let Some(date) = self.state.date.checked_sub_days(Days::new(1)) {
            self.state.date = date;
        }
        self.scores_request()
    }

    pub fn jump_to_today(&mut self) -> NetworkRequest {
        self.state.date = today_eastern();
        self.scores_request()
    }

    // -----------------------------------------------------------------------
    // Scoreboard table
    // -----------------------------------------------------------------------

    pub fn cycle_filter(&mut self) {
        self.state.scoreboard.cycle_filter();
    }

    pub fn sort_by(&mut self, column: SortColumn) {
        self.state.scoreboard.sort_by(column);
    }

    pub fn game_down(&mut self) {
        self.state.scoreboard.select_down();
    }

    pub fn game_up(&mut self) {
        self.state.scoreboard.select_up();
    }

    /// Box score request for the highlighted game, switching to the Box Score
    /// tab as a side-effect. With no games loaded at all this refetches the
    /// scoreboard instead.
    pub fn select_game(&mut self) -> Option<NetworkRequest> {
        if self.state.scoreboard.games.is_empty() {
            return Some(self.scores_request());
        }
        let Some(game) = self.state.scoreboard.selected_game() else {
            self.state.last_error = Some("Please select a game to view the box score.".to_string());
            return None;
        };
        let league = self
            .state
            .scoreboard
            .loaded_for
            .map(|(league, _)| league)
            .unwrap_or(self.state.league);
        let game_id = game.game_id.clone();
        let label = game_label(game);
        self.state.last_error = None;
        self.state.box_score.request(game_id.clone(), label.clone());
        self.update_tab(MenuItem::BoxScore);
        let request = NetworkRequest::LoadBoxScore { league, game_id, label };
        Some(request)
    }

    // -----------------------------------------------------------------------
    // Box score view
    // -----------------------------------------------------------------------

    pub fn toggle_box_section(&mut self) {
        let box_score = &mut self.state.box_score;
        box_score.section = box_score.section.toggle();
        box_score.scroll_offset = 0;
    }

    pub fn box_scroll_down(&mut self) {
        self.state.box_score.scroll_offset = self.state.box_score.scroll_offset.saturating_add(1);
    }

    pub fn box_scroll_up(&mut self) {
        self.state.box_score.scroll_offset = self.state.box_score.scroll_offset.saturating_sub(1);
    }
}
