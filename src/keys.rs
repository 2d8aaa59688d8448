use crate::app::{App, MenuItem};
use crate::state::app_state::SortColumn;
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;
    let mut request: Option<NetworkRequest> = None;

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, KeyCode::F(1), _) => guard.update_tab(MenuItem::Scores),
        (_, KeyCode::F(2), _) => guard.update_tab(MenuItem::BoxScore),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // League / date selection
        (_, Char(']'), _) => request = Some(guard.next_league()),
        (_, Char('['), _) => request = Some(guard.prev_league()),
        (MenuItem::Scores, Char('l') | KeyCode::Right, _) => request = Some(guard.next_day()),
        (MenuItem::Scores, Char('h') | KeyCode::Left, _) => request = Some(guard.prev_day()),
        (MenuItem::Scores, Char('t'), _) => request = Some(guard.jump_to_today()),
        (MenuItem::Scores, Char('r'), _) => request = Some(guard.scores_request()),

        // Scoreboard table
        (MenuItem::Scores, Char('s'), _) => guard.cycle_filter(),
        (MenuItem::Scores, Char(digit @ '1'..='7'), _) => {
            if let Some(column) = SortColumn::from_digit(digit) {
                guard.sort_by(column);
            }
        }
        (MenuItem::Scores, Char('j') | KeyCode::Down, _) => guard.game_down(),
        (MenuItem::Scores, Char('k') | KeyCode::Up, _) => guard.game_up(),
        (MenuItem::Scores, KeyCode::Enter, _) => request = guard.select_game(),

        // Box score navigation
        (MenuItem::BoxScore, KeyCode::Tab, _) => guard.toggle_box_section(),
        (MenuItem::BoxScore, Char('j') | KeyCode::Down, _) => guard.box_scroll_down(),
        (MenuItem::BoxScore, Char('k') | KeyCode::Up, _) => guard.box_scroll_up(),
        (MenuItem::BoxScore, KeyCode::Esc, _) => guard.update_tab(MenuItem::Scores),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }

    drop(guard);
    if let Some(request) = request {
        let _ = network_requests.send(request).await;
    }
}
