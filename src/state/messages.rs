use crate::state::network::LoadingState;
use chrono::NaiveDate;
use crossterm::event::KeyEvent;
use sportsboard_api::{BoxScoreRecord, GameRecord, League};

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadScores { league: League, date: NaiveDate },
    LoadBoxScore { league: League, game_id: String, label: String },
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    ScoresLoaded { league: League, date: NaiveDate, games: Vec<GameRecord> },
    BoxScoreLoaded { game_id: String, label: String, record: BoxScoreRecord },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
    AnimationTick,
}
