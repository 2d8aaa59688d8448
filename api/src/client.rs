use crate::espn::{
    EspnAthleteStats, EspnCompetitor, EspnEvent, EspnStatCategory, EspnStatPair, EspnStatValues,
    ScoreboardResponse, SummaryResponse,
};
use crate::observer::{FetchObserver, LogObserver};
use crate::{
    AthleteLine, AthleteStats, BoxScoreRecord, GameRecord, GameStatus, League, MISSING_SCORE,
    PlayerStatCategory, StatPair, TeamLine, UpstreamPath,
};
use chrono::{NaiveDate, NaiveDateTime, Utc};
use chrono_tz::America::New_York;
use reqwest::Url;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub type FetchResult<T> = Result<T, FetchError>;

pub const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";

// ESPN serves an HTML error page to unknown agents on some edges.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Shape of `event.date` on the scoreboard, always UTC.
const EVENT_TIME_FORMAT: &str = "%Y-%m-%dT%H:%MZ";
const KICKOFF_FORMAT: &str = "%I:%M %p ET";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// `None` keeps reqwest's own default.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: ESPN_SITE_V2.to_owned(),
            user_agent: BROWSER_USER_AGENT.to_owned(),
            timeout: None,
        }
    }
}

/// Blocking scoreboard client. Holds no per-call state, so one instance can
/// serve any number of sequential fetches.
#[derive(Clone)]
pub struct ScoreClient {
    client: Client,
    base_url: String,
    observer: Arc<dyn FetchObserver>,
}

impl Default for ScoreClient {
    fn default() -> Self {
        let config = ClientConfig::default();
        Self {
            client: build_http_client(&config).unwrap_or_default(),
            base_url: config.base_url,
            observer: Arc::new(LogObserver),
        }
    }
}

impl fmt::Debug for ScoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub enum FetchError {
    UnsupportedLeague(String),
    InvalidDateFormat(String),
    Network(reqwest::Error, String),
    Unexpected(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::UnsupportedLeague(_) => "unsupported_league",
            FetchError::InvalidDateFormat(_) => "invalid_date_format",
            FetchError::Network(..) => "network_error",
            FetchError::Unexpected(_) => "unexpected_error",
        }
    }

    /// Message suitable for showing to an end user, distinct per kind.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::UnsupportedLeague(_) => "Selected league is not supported.".to_owned(),
            FetchError::InvalidDateFormat(_) => "Invalid date format. Please use YYYYMMDD.".to_owned(),
            FetchError::Network(e, _) => format!("Failed to connect: {e}"),
            FetchError::Unexpected(msg) => format!("An unexpected error occurred: {msg}"),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::UnsupportedLeague(league) => write!(f, "Unsupported league: {league}"),
            FetchError::InvalidDateFormat(date) => {
                write!(f, "Invalid date format: {date:?} (expected YYYYMMDD)")
            }
            FetchError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            FetchError::Unexpected(msg) => write!(f, "Unexpected error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Network(e, _) => Some(e),
            _ => None,
        }
    }
}

impl ScoreClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ClientConfig) -> FetchResult<Self> {
        let client = build_http_client(&config)
            .map_err(|e| FetchError::Unexpected(format!("could not build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            observer: Arc::new(LogObserver),
        })
    }

    pub fn with_observer(mut self, observer: Arc<dyn FetchObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one day's games for a league given as a user-supplied key.
    ///
    /// `date` must be `YYYYMMDD`; when omitted, today's date in US Eastern is
    /// used. Validation happens before any request is made.
    pub fn fetch_scores(&self, league: &str, date: Option<&str>) -> FetchResult<Vec<GameRecord>> {
        let league = league
            .parse::<League>()
            .map_err(|e| FetchError::UnsupportedLeague(e.0))?;
        let date = match date {
            Some(raw) => parse_query_date(raw)?,
            None => today_eastern(),
        };
        self.fetch_scoreboard(league, date)
    }

    pub fn fetch_scoreboard(&self, league: League, date: NaiveDate) -> FetchResult<Vec<GameRecord>> {
        self.fetch_scoreboard_at(&league.upstream_path(), date)
    }

    /// Fetch one day's games for any upstream path. Events that can't be
    /// normalized are reported to the observer and left out.
    pub fn fetch_scoreboard_at(
        &self,
        path: &UpstreamPath,
        date: NaiveDate,
    ) -> FetchResult<Vec<GameRecord>> {
        let dates = date.format("%Y%m%d").to_string();
        let url = self.endpoint(path, "scoreboard", &[("dates", &dates)])?;
        let raw: ScoreboardResponse = self.get(&url)?;

        let events = raw.events.unwrap_or_default();
        if events.is_empty() {
            self.observer.scoreboard_empty(&url);
            return Ok(Vec::new());
        }

        let games = events
            .into_iter()
            .filter_map(|event| match map_event(event) {
                Ok(game) => Some(game),
                Err(skip) => {
                    self.observer.event_skipped(&skip.event_id, &skip.reason);
                    None
                }
            })
            .collect();
        Ok(games)
    }

    /// Fetch the box score for one game.
    pub fn fetch_box_score(&self, path: &UpstreamPath, game_id: &str) -> FetchResult<BoxScoreRecord> {
        let url = self.endpoint(path, "summary", &[("event", game_id)])?;
        let raw: SummaryResponse = self.get(&url)?;
        let record = map_summary(raw, self.observer.as_ref());
        if let Err(e) = &record {
            self.observer.request_failed(&url, &e.to_string());
        }
        let record = record?;
        if record.player_stats.is_empty() {
            self.observer.player_stats_missing(game_id);
        }
        Ok(record)
    }

    fn endpoint(&self, path: &UpstreamPath, resource: &str, params: &[(&str, &str)]) -> FetchResult<String> {
        let base = format!("{}/{path}/{resource}", self.base_url);
        Url::parse_with_params(&base, params)
            .map(String::from)
            .map_err(|e| FetchError::Unexpected(format!("invalid URL {base}: {e}")))
    }

    fn get<T: DeserializeOwned>(&self, url: &str) -> FetchResult<T> {
        self.observer.request_started(url);

        let result = self
            .client
            .get(url)
            .send()
            .and_then(|res| res.error_for_status())
            .and_then(|res| res.text())
            .map_err(|e| FetchError::Network(e, url.to_owned()))
            .and_then(|body| {
                serde_json::from_str::<T>(&body)
                    .map_err(|e| FetchError::Unexpected(format!("invalid JSON from {url}: {e}")))
            });

        if let Err(e) = &result {
            self.observer.request_failed(url, &e.to_string());
        }
        result
    }
}

fn build_http_client(config: &ClientConfig) -> reqwest::Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers);
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    builder.build()
}

// ---------------------------------------------------------------------------
// Dates and times
// ---------------------------------------------------------------------------

/// Today's calendar date in US Eastern.
pub fn today_eastern() -> NaiveDate {
    Utc::now().with_timezone(&New_York).date_naive()
}

/// Parse a strict `YYYYMMDD` query date.
pub fn parse_query_date(raw: &str) -> FetchResult<NaiveDate> {
    let invalid = || FetchError::InvalidDateFormat(raw.to_owned());
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let year = raw[..4].parse::<i32>().map_err(|_| invalid())?;
    let month = raw[4..6].parse::<u32>().map_err(|_| invalid())?;
    let day = raw[6..8].parse::<u32>().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Leading `YYYY-MM-DD` of an ESPN timestamp, i.e. the UTC calendar date.
fn event_date(timestamp: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(timestamp.get(..10)?, "%Y-%m-%d").ok()
}

/// `2024-01-15T01:00Z` → `08:00 PM ET`. `None` if the shape doesn't match.
fn kickoff_time_eastern(timestamp: &str) -> Option<String> {
    let utc = NaiveDateTime::parse_from_str(timestamp, EVENT_TIME_FORMAT)
        .ok()?
        .and_utc();
    Some(utc.with_timezone(&New_York).format(KICKOFF_FORMAT).to_string())
}

// ---------------------------------------------------------------------------
// Mapping: ESPN wire types → clean domain types
// ---------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq)]
struct SkippedEvent {
    event_id: String,
    reason: String,
}

fn map_event(raw: Value) -> Result<GameRecord, SkippedEvent> {
    let event_id = match raw.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => "unknown".to_owned(),
        Some(other) => other.to_string(),
    };
    let skip = |reason: String| SkippedEvent {
        event_id: event_id.clone(),
        reason,
    };

    let event: EspnEvent = serde_json::from_value(raw).map_err(|e| skip(e.to_string()))?;
    map_event_to_game(&event).map_err(skip)
}

fn map_event_to_game(event: &EspnEvent) -> Result<GameRecord, String> {
    let game_id = event.id.clone().ok_or("missing id")?;
    let timestamp = event.date.as_deref().ok_or("missing date")?;
    let date = event_date(timestamp).ok_or_else(|| format!("unparseable date {timestamp:?}"))?;
    let kickoff_time = kickoff_time_eastern(timestamp).unwrap_or_default();

    let short_detail = event
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref())
        .and_then(|t| t.short_detail.as_deref())
        .ok_or("missing status.type.shortDetail")?;

    let competitors = event
        .competitions
        .as_deref()
        .and_then(|c| c.first())
        .and_then(|c| c.competitors.as_deref())
        .ok_or("missing competitors")?;
    if competitors.len() != 2 {
        return Err(format!("expected 2 competitors, found {}", competitors.len()));
    }

    let home = find_side(competitors, "home").ok_or("no home competitor")?;
    let away = find_side(competitors, "away").ok_or("no away competitor")?;
    let home_team = home.display_name().ok_or("home team has no displayName")?;
    let away_team = away.display_name().ok_or("away team has no displayName")?;

    Ok(GameRecord {
        game_id,
        date,
        kickoff_time,
        status: GameStatus::from_short_detail(short_detail),
        home_team: home_team.to_owned(),
        away_team: away_team.to_owned(),
        home_score: score_or_missing(home.score.clone()),
        away_score: score_or_missing(away.score.clone()),
    })
}

fn find_side<'a>(competitors: &'a [EspnCompetitor], side: &str) -> Option<&'a EspnCompetitor> {
    competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some(side))
}

fn score_or_missing(score: Option<String>) -> String {
    score.unwrap_or_else(|| MISSING_SCORE.to_owned())
}

fn map_summary(raw: SummaryResponse, observer: &dyn FetchObserver) -> FetchResult<BoxScoreRecord> {
    let unexpected = |what: &str| FetchError::Unexpected(format!("summary {what}"));
    let mut record = BoxScoreRecord::default();

    let competitors = raw
        .header
        .and_then(|h| h.competitions)
        .and_then(|c| c.into_iter().next())
        .and_then(|c| c.competitors)
        .unwrap_or_default();
    for competitor in competitors {
        let name = competitor
            .display_name()
            .ok_or_else(|| unexpected("header competitor has no team.displayName"))?
            .to_owned();
        let home_away = competitor
            .home_away
            .ok_or_else(|| unexpected("header competitor has no homeAway"))?;
        record.teams.push(TeamLine {
            name,
            score: score_or_missing(competitor.score),
            home_away,
        });
    }

    let boxscore = raw.boxscore.unwrap_or_default();

    for team in boxscore.teams.unwrap_or_default() {
        let name = team
            .team
            .and_then(|t| t.display_name)
            .ok_or_else(|| unexpected("boxscore team has no displayName"))?;
        let stats = team
            .statistics
            .unwrap_or_default()
            .into_iter()
            .map(map_stat_pair)
            .collect();
        record.insert_team_stats(name, stats);
    }

    for team in boxscore.players.unwrap_or_default() {
        let name = team
            .team
            .and_then(|t| t.display_name)
            .ok_or_else(|| unexpected("boxscore players entry has no displayName"))?;
        let categories: Vec<PlayerStatCategory> = team
            .statistics
            .unwrap_or_default()
            .into_iter()
            .map(map_stat_category)
            .collect();
        if observer.wants_player_stats_shape() {
            let shape = serde_json::to_string(&categories).unwrap_or_default();
            observer.player_stats_shape(&name, &shape);
        }
        record.insert_player_stats(name, categories);
    }

    Ok(record)
}

fn map_stat_pair(pair: EspnStatPair) -> StatPair {
    StatPair {
        name: pair.name.unwrap_or_default(),
        display_value: pair.display_value.unwrap_or_else(|| MISSING_SCORE.to_owned()),
    }
}

fn map_stat_category(category: EspnStatCategory) -> PlayerStatCategory {
    PlayerStatCategory {
        name: category.name,
        keys: category.keys.unwrap_or_default(),
        labels: category.labels.unwrap_or_default(),
        totals: category.totals.unwrap_or_default(),
        athletes: category
            .athletes
            .unwrap_or_default()
            .into_iter()
            .map(map_athlete)
            .collect(),
    }
}

fn map_athlete(entry: EspnAthleteStats) -> AthleteLine {
    let stats = match entry.stats {
        Some(EspnStatValues::Structured(pairs)) => {
            AthleteStats::Structured(pairs.into_iter().map(map_stat_pair).collect())
        }
        Some(EspnStatValues::Flat(values)) => AthleteStats::Flat(values),
        None => AthleteStats::default(),
    };
    AthleteLine {
        name: entry
            .athlete
            .and_then(|a| a.display_name)
            .unwrap_or_default(),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::SilentObserver;
    use serde_json::json;

    fn competitor(side: &str, name: &str, score: Option<&str>) -> Value {
        let mut c = json!({ "homeAway": side, "team": { "displayName": name } });
        if let Some(score) = score {
            c["score"] = json!(score);
        }
        c
    }

    fn event(id: &str, date: &str, detail: &str, competitors: Vec<Value>) -> Value {
        json!({
            "id": id,
            "date": date,
            "status": { "type": { "shortDetail": detail } },
            "competitions": [ { "competitors": competitors } ],
        })
    }

    fn standard_event(id: &str, detail: &str) -> Value {
        event(
            id,
            "2024-01-15T01:00Z",
            detail,
            vec![
                competitor("home", "Boston Celtics", Some("112")),
                competitor("away", "Miami Heat", Some("104")),
            ],
        )
    }

    #[test]
    fn event_fields_are_copied_verbatim() {
        let game = map_event(standard_event("401585", "Final")).unwrap();
        assert_eq!(
            game,
            GameRecord {
                game_id: "401585".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                kickoff_time: "08:00 PM ET".into(),
                status: GameStatus::Final,
                home_team: "Boston Celtics".into(),
                away_team: "Miami Heat".into(),
                home_score: "112".into(),
                away_score: "104".into(),
            }
        );
    }

    #[test]
    fn status_heuristic_applies_to_events() {
        let status = |detail| map_event(standard_event("1", detail)).unwrap().status;
        assert_eq!(status("Final"), GameStatus::Final);
        assert_eq!(status("8/12 - 7:00 PM"), GameStatus::Scheduled);
        assert_eq!(status("7:00 PM"), GameStatus::Live);
    }

    #[test]
    fn kickoff_time_follows_daylight_saving() {
        assert_eq!(kickoff_time_eastern("2024-01-15T00:30Z").as_deref(), Some("07:30 PM ET"));
        assert_eq!(kickoff_time_eastern("2024-07-04T23:10Z").as_deref(), Some("07:10 PM ET"));
        assert_eq!(kickoff_time_eastern("2024-07-04T23:10:00Z"), None);
        assert_eq!(kickoff_time_eastern("not a time"), None);
    }

    #[test]
    fn odd_timestamp_keeps_event_with_blank_time() {
        let mut raw = standard_event("9", "Final");
        raw["date"] = json!("2024-03-02T18:00:00Z");
        let game = map_event(raw).unwrap();
        assert_eq!(game.kickoff_time, "");
        assert_eq!(game.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
    }

    #[test]
    fn unparseable_date_skips_event() {
        let mut raw = standard_event("9", "Final");
        raw["date"] = json!("soon");
        let skip = map_event(raw).unwrap_err();
        assert_eq!(skip.event_id, "9");
    }

    #[test]
    fn missing_score_defaults_to_placeholder() {
        let raw = event(
            "2",
            "2024-01-15T01:00Z",
            "1/15 - 8:00 PM EST",
            vec![competitor("home", "A", None), competitor("away", "B", None)],
        );
        let game = map_event(raw).unwrap();
        assert_eq!(game.home_score, "N/A");
        assert_eq!(game.away_score, "N/A");
        assert_eq!(game.status, GameStatus::Scheduled);
    }

    #[test]
    fn wrong_competitor_count_is_skipped() {
        let one = event(
            "3",
            "2024-01-15T01:00Z",
            "Final",
            vec![competitor("home", "A", None)],
        );
        let three = event(
            "4",
            "2024-01-15T01:00Z",
            "Final",
            vec![
                competitor("home", "A", None),
                competitor("away", "B", None),
                competitor("away", "C", None),
            ],
        );
        assert_eq!(map_event(one).unwrap_err().event_id, "3");
        assert_eq!(map_event(three).unwrap_err().event_id, "4");
    }

    #[test]
    fn missing_side_is_skipped() {
        let raw = event(
            "5",
            "2024-01-15T01:00Z",
            "Final",
            vec![competitor("home", "A", None), competitor("home", "B", None)],
        );
        let skip = map_event(raw).unwrap_err();
        assert_eq!(skip.reason, "no away competitor");
    }

    #[test]
    fn malformed_event_reports_unknown_id() {
        let skip = map_event(json!({ "competitions": "nope" })).unwrap_err();
        assert_eq!(skip.event_id, "unknown");
        let skip = map_event(json!({ "id": 77, "date": "2024-01-15T01:00Z" })).unwrap_err();
        assert_eq!(skip.event_id, "77");
    }

    #[test]
    fn missing_status_is_skipped() {
        let mut raw = standard_event("6", "Final");
        raw["status"] = json!({});
        assert!(map_event(raw).is_err());
    }

    #[test]
    fn query_date_must_be_eight_digits() {
        assert_eq!(
            parse_query_date("20240115").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        for bad in ["2024-01-15", "2024115", "202401155", "abcdefgh", "20241301", "20240230", ""] {
            assert!(
                matches!(parse_query_date(bad), Err(FetchError::InvalidDateFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn summary_without_sections_is_empty() {
        let record = map_summary(SummaryResponse::default(), &SilentObserver).unwrap();
        assert_eq!(record, BoxScoreRecord::default());
    }

    #[test]
    fn summary_competitor_without_name_is_unexpected() {
        let raw: SummaryResponse = serde_json::from_value(json!({
            "header": { "competitions": [ { "competitors": [ { "homeAway": "home" } ] } ] }
        }))
        .unwrap();
        let err = map_summary(raw, &SilentObserver).unwrap_err();
        assert_eq!(err.kind(), "unexpected_error");
    }

    #[test]
    fn summary_preserves_both_athlete_shapes() {
        let raw: SummaryResponse = serde_json::from_value(json!({
            "boxscore": {
                "players": [
                    {
                        "team": { "displayName": "Home FC" },
                        "statistics": [
                            {
                                "name": "goalkeeping",
                                "athletes": [
                                    {
                                        "athlete": { "displayName": "Keeper" },
                                        "stats": [ { "name": "saves", "displayValue": "4" } ]
                                    }
                                ]
                            },
                            {
                                "labels": ["MIN", "PTS"],
                                "athletes": [
                                    { "athlete": { "displayName": "Guard" }, "stats": ["31", "22"] }
                                ]
                            }
                        ]
                    }
                ]
            }
        }))
        .unwrap();

        let record = map_summary(raw, &SilentObserver).unwrap();
        let categories = record.player_stats_for("Home FC").unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name.as_deref(), Some("goalkeeping"));
        assert_eq!(
            categories[0].athletes[0].stats,
            AthleteStats::Structured(vec![StatPair {
                name: "saves".into(),
                display_value: "4".into()
            }])
        );
        assert_eq!(categories[1].name, None);
        assert_eq!(categories[1].labels, vec!["MIN", "PTS"]);
        assert_eq!(
            categories[1].athletes[0].stats,
            AthleteStats::Flat(vec!["31".into(), "22".into()])
        );
    }

    #[derive(Default)]
    struct ShapeObserver {
        wanted: bool,
        shapes: std::sync::Mutex<Vec<String>>,
    }

    impl FetchObserver for ShapeObserver {
        fn wants_player_stats_shape(&self) -> bool {
            self.wanted
        }

        fn player_stats_shape(&self, team: &str, _raw: &str) {
            self.shapes.lock().unwrap().push(team.to_owned());
        }
    }

    #[test]
    fn player_stats_shape_is_only_reported_on_request() {
        let raw = || -> SummaryResponse {
            serde_json::from_value(json!({
                "boxscore": { "players": [
                    { "team": { "displayName": "Home FC" }, "statistics": [] }
                ]}
            }))
            .unwrap()
        };

        let quiet = ShapeObserver::default();
        map_summary(raw(), &quiet).unwrap();
        assert!(quiet.shapes.lock().unwrap().is_empty());

        let chatty = ShapeObserver { wanted: true, ..Default::default() };
        map_summary(raw(), &chatty).unwrap();
        assert_eq!(*chatty.shapes.lock().unwrap(), vec!["Home FC".to_owned()]);
    }

    #[test]
    fn fetch_error_kinds_have_distinct_messages() {
        let errors = [
            FetchError::UnsupportedLeague("x".into()),
            FetchError::InvalidDateFormat("x".into()),
            FetchError::Unexpected("x".into()),
        ];
        let messages: Vec<String> = errors.iter().map(FetchError::user_message).collect();
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert_eq!(errors[2].kind(), "unexpected_error");
    }
}
