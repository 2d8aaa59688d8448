use crate::state::messages::{NetworkRequest, NetworkResponse};
use log::{debug, error};
use sportsboard_api::client::{ClientConfig, FetchError, ScoreClient};
use std::thread::{self, JoinHandle};
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
    spinner_index: usize,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ', spinner_index: 0 }
    }
}

impl LoadingState {
    fn started() -> Self {
        Self { is_loading: true, spinner_char: SPINNER_CHARS[0], spinner_index: 0 }
    }

    fn finished(is_ok: bool) -> Self {
        let spinner_char = if is_ok { ' ' } else { ERROR_CHAR };
        Self { is_loading: false, spinner_char, spinner_index: 0 }
    }

    /// Step the spinner; driven by the UI animation tick.
    pub fn advance(&mut self) {
        if self.is_loading {
            self.spinner_index = (self.spinner_index + 1) % SPINNER_CHARS.len();
            self.spinner_char = SPINNER_CHARS[self.spinner_index];
        }
    }
}

/// Owns the blocking score client and serves requests one at a time on a
/// dedicated OS thread, so fetches never overlap and never block the UI loop.
pub struct NetworkWorker {
    config: ClientConfig,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        config: ClientConfig,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self { config, requests, responses }
    }

    pub fn spawn(self) -> std::io::Result<JoinHandle<()>> {
        thread::Builder::new()
            .name("network".into())
            .spawn(move || self.run())
    }

    fn run(mut self) {
        let client = match ScoreClient::with_config(self.config.clone()) {
            Ok(client) => client,
            Err(e) => {
                error!("Failed to build score client: {e}");
                let _ = self.responses.blocking_send(NetworkResponse::Error {
                    message: e.user_message(),
                });
                return;
            }
        };

        while let Some(request) = self.requests.blocking_recv() {
            self.send_loading(LoadingState::started());

            let result = match request {
                NetworkRequest::LoadScores { league, date } => {
                    debug!("loading {league} scores for {date}");
                    client
                        .fetch_scoreboard(league, date)
                        .map(|games| NetworkResponse::ScoresLoaded { league, date, games })
                }
                NetworkRequest::LoadBoxScore { league, game_id, label } => {
                    debug!("loading box score for {game_id} ({label})");
                    client
                        .fetch_box_score(&league.upstream_path(), &game_id)
                        .map(|record| NetworkResponse::BoxScoreLoaded { game_id, label, record })
                }
            };

            debug!("network request complete");
            self.send_loading(LoadingState::finished(result.is_ok()));

            let response = result.unwrap_or_else(|err: FetchError| {
                error!("Fetch failed: {err}");
                NetworkResponse::Error { message: err.user_message() }
            });

            if let Err(e) = self.responses.blocking_send(response) {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    fn send_loading(&self, loading_state: LoadingState) {
        let _ = self
            .responses
            .blocking_send(NetworkResponse::LoadingStateChanged { loading_state });
    }
}
