//! Hooks the client calls while fetching. The default [`LogObserver`] forwards
//! to the `log` facade; whoever installs the logger owns its lifecycle.

use log::{Level, debug, error, info, log_enabled, warn};

pub trait FetchObserver: Send + Sync {
    fn request_started(&self, _url: &str) {}

    fn scoreboard_empty(&self, _url: &str) {}

    /// An event was dropped from the batch; `event_id` is `"unknown"` if absent.
    fn event_skipped(&self, _event_id: &str, _reason: &str) {}

    fn player_stats_missing(&self, _game_id: &str) {}

    /// Whether `player_stats_shape` wants to be called at all; the shape is
    /// only serialized when this is true.
    fn wants_player_stats_shape(&self) -> bool {
        false
    }

    /// Raw upstream shape of one team's player stat categories.
    fn player_stats_shape(&self, _team: &str, _raw: &str) {}

    fn request_failed(&self, _url: &str, _error: &str) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl FetchObserver for LogObserver {
    fn request_started(&self, url: &str) {
        info!("fetching {url}");
    }

    fn scoreboard_empty(&self, url: &str) {
        info!("no games found at {url}");
    }

    fn event_skipped(&self, event_id: &str, reason: &str) {
        warn!("skipping event {event_id}: {reason}");
    }

    fn player_stats_missing(&self, game_id: &str) {
        warn!("no player stats available for game {game_id}");
    }

    fn wants_player_stats_shape(&self) -> bool {
        log_enabled!(Level::Debug)
    }

    fn player_stats_shape(&self, team: &str, raw: &str) {
        debug!("player stats structure for {team}: {raw}");
    }

    fn request_failed(&self, url: &str, error: &str) {
        error!("request to {url} failed: {error}");
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl FetchObserver for SilentObserver {}
