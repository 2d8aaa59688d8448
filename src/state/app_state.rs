use crate::app::MenuItem;
use chrono::NaiveDate;
use sportsboard_api::{AthleteLine, AthleteStats, BoxScoreRecord, GameRecord, GameStatus, League, PlayerStatCategory};

// ---------------------------------------------------------------------------
// Scoreboard filtering and sorting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Live,
    Scheduled,
    Final,
}

impl StatusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Live => "Live",
            StatusFilter::Scheduled => "Scheduled",
            StatusFilter::Final => "Final",
        }
    }

    pub fn next(self) -> Self {
        match self {
            StatusFilter::All => StatusFilter::Live,
            StatusFilter::Live => StatusFilter::Scheduled,
            StatusFilter::Scheduled => StatusFilter::Final,
            StatusFilter::Final => StatusFilter::All,
        }
    }

    pub fn matches(&self, status: GameStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Live => status == GameStatus::Live,
            StatusFilter::Scheduled => status == GameStatus::Scheduled,
            StatusFilter::Final => status == GameStatus::Final,
        }
    }
}

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    AwayTeam,
    HomeTeam,
    AwayScore,
    HomeScore,
    Status,
    Date,
    Time,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::AwayTeam,
        SortColumn::HomeTeam,
        SortColumn::AwayScore,
        SortColumn::HomeScore,
        SortColumn::Status,
        SortColumn::Date,
        SortColumn::Time,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::AwayTeam => "Away Team",
            SortColumn::HomeTeam => "Home Team",
            SortColumn::AwayScore => "Away Score",
            SortColumn::HomeScore => "Home Score",
            SortColumn::Status => "Status",
            SortColumn::Date => "Date",
            SortColumn::Time => "Time",
        }
    }

    /// 1-based column number from the keyboard.
    pub fn from_digit(digit: char) -> Option<Self> {
        let idx = digit.to_digit(10)?.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }

    /// Cell text for this column; sorting compares these strings.
    pub fn cell(&self, game: &GameRecord) -> String {
        match self {
            SortColumn::AwayTeam => game.away_team.clone(),
            SortColumn::HomeTeam => game.home_team.clone(),
            SortColumn::AwayScore => game.away_score.clone(),
            SortColumn::HomeScore => game.home_score.clone(),
            SortColumn::Status => game.status.label().to_string(),
            SortColumn::Date => game.date.format("%Y-%m-%d").to_string(),
            SortColumn::Time => game.kickoff_time.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder {
    pub column: SortColumn,
    pub reverse: bool,
}

#[derive(Debug, Default)]
pub struct ScoreboardState {
    pub games: Vec<GameRecord>,
    /// League and date the current `games` were fetched for.
    pub loaded_for: Option<(League, NaiveDate)>,
    pub filter: StatusFilter,
    pub sort: Option<SortOrder>,
    /// Index into `visible_games()`.
    pub selected: usize,
}

impl ScoreboardState {
    pub fn load(&mut self, league: League, date: NaiveDate, games: Vec<GameRecord>) {
        self.games = games;
        self.loaded_for = Some((league, date));
        self.selected = 0;
    }

    /// Games after filtering, in sort order (upstream order when unsorted).
    pub fn visible_games(&self) -> Vec<&GameRecord> {
        let mut games: Vec<&GameRecord> = self
            .games
            .iter()
            .filter(|g| self.filter.matches(g.status))
            .collect();
        if let Some(order) = self.sort {
            games.sort_by(|a, b| {
                let ord = order.column.cell(a).cmp(&order.column.cell(b));
                if order.reverse { ord.reverse() } else { ord }
            });
        }
        games
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }

    /// Sort by `column`; choosing the current column again flips direction.
    pub fn sort_by(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(order) if order.column == column => SortOrder { column, reverse: !order.reverse },
            _ => SortOrder { column, reverse: false },
        });
    }

    pub fn select_down(&mut self) {
        let max = self.visible_games().len().saturating_sub(1);
        if self.selected < max {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_game(&self) -> Option<&GameRecord> {
        self.visible_games().get(self.selected).copied()
    }

    /// Message to show instead of the table, if nothing is visible.
    pub fn empty_message(&self) -> Option<String> {
        if self.loaded_for.is_none() {
            return Some("Loading scores...".to_string());
        }
        if self.games.is_empty() {
            return Some("No games found for the selected league and date.".to_string());
        }
        if self.visible_games().is_empty() {
            return Some(format!(
                "No {} games found for the selected league and date.",
                self.filter.label().to_lowercase()
            ));
        }
        None
    }
}

/// `Away @ Home (2024-01-15 07:30 PM ET)`
pub fn game_label(game: &GameRecord) -> String {
    format!(
        "{} @ {} ({} {})",
        game.away_team,
        game.home_team,
        game.date.format("%Y-%m-%d"),
        game.kickoff_time
    )
    .trim_end()
    .to_string()
}

// ---------------------------------------------------------------------------
// Box score state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxSection {
    #[default]
    TeamStats,
    PlayerStats,
}

impl BoxSection {
    pub fn toggle(self) -> Self {
        match self {
            BoxSection::TeamStats => BoxSection::PlayerStats,
            BoxSection::PlayerStats => BoxSection::TeamStats,
        }
    }
}

#[derive(Debug, Default)]
pub struct BoxScoreState {
    pub game_id: Option<String>,
    pub label: String,
    pub record: Option<BoxScoreRecord>,
    pub section: BoxSection,
    pub scroll_offset: u16,
}

impl BoxScoreState {
    /// Forget the shown record while `game_id` is being fetched.
    pub fn request(&mut self, game_id: String, label: String) {
        self.game_id = Some(game_id);
        self.label = label;
        self.record = None;
        self.scroll_offset = 0;
    }

    pub fn is_pending(&self, game_id: &str) -> bool {
        self.record.is_none() && self.game_id.as_deref() == Some(game_id)
    }

    pub fn load(&mut self, game_id: String, label: String, record: BoxScoreRecord) {
        if self.game_id.as_deref() != Some(game_id.as_str()) {
            self.scroll_offset = 0;
        }
        self.game_id = Some(game_id);
        self.label = label;
        self.record = Some(record);
    }
}

/// A player stats category rendered as a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTable {
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Flatten one team's category into headers and rows, whichever stat shape
/// the athletes came in.
pub fn player_table(team: &str, category: &PlayerStatCategory) -> PlayerTable {
    let title = format!("{team} - {}", category.name.as_deref().unwrap_or("General"));
    let first = category.athletes.first().map(|a| &a.stats);

    let stat_columns: Vec<String> = match first {
        Some(AthleteStats::Structured(pairs)) if !pairs.is_empty() => pairs
            .iter()
            .map(|p| if p.name.is_empty() { "Unknown".to_string() } else { p.name.clone() })
            .collect(),
        Some(AthleteStats::Flat(values)) if !values.is_empty() => {
            if category.labels.len() == values.len() {
                category.labels.clone()
            } else {
                (1..=values.len()).map(|i| format!("Stat {i}")).collect()
            }
        }
        _ => Vec::new(),
    };

    let mut columns = Vec::with_capacity(stat_columns.len() + 1);
    columns.push("Player".to_string());
    columns.extend(stat_columns);

    let rows = category
        .athletes
        .iter()
        .map(|athlete| athlete_row(athlete, columns.len() - 1))
        .collect();

    PlayerTable { title, columns, rows }
}

fn athlete_row(athlete: &AthleteLine, width: usize) -> Vec<String> {
    let mut row = Vec::with_capacity(width + 1);
    row.push(athlete.name.clone());
    if athlete.stats.is_empty() {
        row.extend(std::iter::repeat_n("N/A".to_string(), width));
    } else {
        row.extend(athlete.stats.values().into_iter().map(str::to_string));
    }
    row
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub league: League,
    pub date: NaiveDate,
    pub scoreboard: ScoreboardState,
    pub box_score: BoxScoreState,
}

impl AppState {
    pub fn new(league: League, date: NaiveDate) -> Self {
        Self {
            league,
            date,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportsboard_api::StatPair;

    fn game(id: &str, away: &str, home: &str, status: GameStatus, time: &str) -> GameRecord {
        GameRecord {
            game_id: id.into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            kickoff_time: time.into(),
            status,
            home_team: home.into(),
            away_team: away.into(),
            home_score: "N/A".into(),
            away_score: "N/A".into(),
        }
    }

    fn loaded(games: Vec<GameRecord>) -> ScoreboardState {
        let mut state = ScoreboardState::default();
        state.load(League::Nba, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), games);
        state
    }

    fn ids(state: &ScoreboardState) -> Vec<&str> {
        state.visible_games().iter().map(|g| g.game_id.as_str()).collect()
    }

    #[test]
    fn unsorted_keeps_upstream_order() {
        let state = loaded(vec![
            game("b", "Z", "Y", GameStatus::Final, ""),
            game("a", "A", "B", GameStatus::Live, ""),
        ]);
        assert_eq!(ids(&state), vec!["b", "a"]);
    }

    #[test]
    fn filter_cycles_and_hides_other_statuses() {
        let mut state = loaded(vec![
            game("1", "A", "B", GameStatus::Final, ""),
            game("2", "C", "D", GameStatus::Live, ""),
            game("3", "E", "F", GameStatus::Scheduled, ""),
        ]);
        state.cycle_filter();
        assert_eq!(state.filter, StatusFilter::Live);
        assert_eq!(ids(&state), vec!["2"]);
        state.cycle_filter();
        assert_eq!(ids(&state), vec!["3"]);
        state.cycle_filter();
        assert_eq!(ids(&state), vec!["1"]);
        state.cycle_filter();
        assert_eq!(state.filter, StatusFilter::All);
    }

    #[test]
    fn sorting_same_column_twice_reverses() {
        let mut state = loaded(vec![
            game("1", "Miami Heat", "B", GameStatus::Final, ""),
            game("2", "Atlanta Hawks", "D", GameStatus::Final, ""),
            game("3", "Chicago Bulls", "F", GameStatus::Final, ""),
        ]);
        state.sort_by(SortColumn::AwayTeam);
        assert_eq!(ids(&state), vec!["2", "3", "1"]);
        state.sort_by(SortColumn::AwayTeam);
        assert_eq!(ids(&state), vec!["1", "3", "2"]);
        state.sort_by(SortColumn::HomeTeam);
        assert_eq!(state.sort, Some(SortOrder { column: SortColumn::HomeTeam, reverse: false }));
    }

    #[test]
    fn selection_is_clamped_to_visible_rows() {
        let mut state = loaded(vec![
            game("1", "A", "B", GameStatus::Final, ""),
            game("2", "C", "D", GameStatus::Final, ""),
        ]);
        state.select_down();
        state.select_down();
        assert_eq!(state.selected_game().map(|g| g.game_id.as_str()), Some("2"));
        state.select_up();
        state.select_up();
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn empty_messages_distinguish_filter_from_no_games() {
        let mut state = ScoreboardState::default();
        assert_eq!(state.empty_message().as_deref(), Some("Loading scores..."));

        state.load(League::Nfl, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), vec![]);
        assert_eq!(
            state.empty_message().as_deref(),
            Some("No games found for the selected league and date.")
        );

        state.load(
            League::Nfl,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            vec![game("1", "A", "B", GameStatus::Final, "")],
        );
        assert_eq!(state.empty_message(), None);
        state.cycle_filter();
        assert_eq!(
            state.empty_message().as_deref(),
            Some("No live games found for the selected league and date.")
        );
    }

    #[test]
    fn sort_column_digits() {
        assert_eq!(SortColumn::from_digit('1'), Some(SortColumn::AwayTeam));
        assert_eq!(SortColumn::from_digit('7'), Some(SortColumn::Time));
        assert_eq!(SortColumn::from_digit('0'), None);
        assert_eq!(SortColumn::from_digit('8'), None);
    }

    #[test]
    fn game_label_matches_picker_format() {
        let g = game("1", "Miami Heat", "Boston Celtics", GameStatus::Final, "07:30 PM ET");
        assert_eq!(game_label(&g), "Miami Heat @ Boston Celtics (2024-01-15 07:30 PM ET)");
    }

    #[test]
    fn structured_category_uses_stat_names() {
        let category = PlayerStatCategory {
            name: Some("goalkeeping".into()),
            athletes: vec![AthleteLine {
                name: "Keeper".into(),
                stats: AthleteStats::Structured(vec![StatPair {
                    name: "saves".into(),
                    display_value: "4".into(),
                }]),
            }],
            ..Default::default()
        };
        let table = player_table("Home FC", &category);
        assert_eq!(table.title, "Home FC - goalkeeping");
        assert_eq!(table.columns, vec!["Player", "saves"]);
        assert_eq!(table.rows, vec![vec!["Keeper".to_string(), "4".to_string()]]);
    }

    #[test]
    fn flat_category_uses_labels_or_numbers() {
        let mut category = PlayerStatCategory {
            labels: vec!["MIN".into(), "PTS".into()],
            athletes: vec![
                AthleteLine {
                    name: "Guard".into(),
                    stats: AthleteStats::Flat(vec!["31".into(), "22".into()]),
                },
                AthleteLine { name: "Bench".into(), stats: AthleteStats::default() },
            ],
            ..Default::default()
        };
        let table = player_table("Celtics", &category);
        assert_eq!(table.title, "Celtics - General");
        assert_eq!(table.columns, vec!["Player", "MIN", "PTS"]);
        assert_eq!(table.rows[1], vec!["Bench", "N/A", "N/A"]);

        category.labels.clear();
        let table = player_table("Celtics", &category);
        assert_eq!(table.columns, vec!["Player", "Stat 1", "Stat 2"]);
    }

    #[test]
    fn box_score_scroll_resets_on_new_game() {
        let mut state = BoxScoreState::default();
        state.load("1".into(), "A @ B".into(), BoxScoreRecord::default());
        state.scroll_offset = 5;
        state.load("1".into(), "A @ B".into(), BoxScoreRecord::default());
        assert_eq!(state.scroll_offset, 5);
        state.load("2".into(), "C @ D".into(), BoxScoreRecord::default());
        assert_eq!(state.scroll_offset, 0);
    }
}
