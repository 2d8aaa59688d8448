pub mod client;
pub mod espn;
pub mod observer;

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Leagues: static table of supported keys and their ESPN path segments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum League {
    Nfl,
    #[default]
    Nba,
    Mlb,
    Nhl,
    Mls,
    PremierLeague,
    LaLiga,
    Bundesliga,
    SerieA,
    Ligue1,
    UefaChampions,
    UefaEuropa,
    NcaaFootball,
    NcaaMensBasketball,
}

impl League {
    pub const ALL: [League; 14] = [
        League::Nfl,
        League::Nba,
        League::Mlb,
        League::Nhl,
        League::Mls,
        League::PremierLeague,
        League::LaLiga,
        League::Bundesliga,
        League::SerieA,
        League::Ligue1,
        League::UefaChampions,
        League::UefaEuropa,
        League::NcaaFootball,
        League::NcaaMensBasketball,
    ];

    /// Lowercase identifier accepted by `FromStr`.
    pub fn key(&self) -> &'static str {
        match self {
            League::Nfl => "nfl",
            League::Nba => "nba",
            League::Mlb => "mlb",
            League::Nhl => "nhl",
            League::Mls => "mls",
            League::PremierLeague => "premier-league",
            League::LaLiga => "la-liga",
            League::Bundesliga => "bundesliga",
            League::SerieA => "serie-a",
            League::Ligue1 => "ligue-1",
            League::UefaChampions => "uefa-champions",
            League::UefaEuropa => "uefa-europa",
            League::NcaaFootball => "ncaa-football",
            League::NcaaMensBasketball => "ncaa-mens-basketball",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            League::Nfl => "NFL",
            League::Nba => "NBA",
            League::Mlb => "MLB",
            League::Nhl => "NHL",
            League::Mls => "MLS",
            League::PremierLeague => "Premier League",
            League::LaLiga => "La Liga",
            League::Bundesliga => "Bundesliga",
            League::SerieA => "Serie A",
            League::Ligue1 => "Ligue 1",
            League::UefaChampions => "UEFA Champions League",
            League::UefaEuropa => "UEFA Europa League",
            League::NcaaFootball => "NCAA Football",
            League::NcaaMensBasketball => "NCAA Men's Basketball",
        }
    }

    fn path(&self) -> &'static str {
        match self {
            League::Nfl => "football/nfl",
            League::Nba => "basketball/nba",
            League::Mlb => "baseball/mlb",
            League::Nhl => "hockey/nhl",
            League::Mls => "soccer/usa.1",
            League::PremierLeague => "soccer/eng.1",
            League::LaLiga => "soccer/esp.1",
            League::Bundesliga => "soccer/ger.1",
            League::SerieA => "soccer/ita.1",
            League::Ligue1 => "soccer/fra.1",
            League::UefaChampions => "soccer/uefa.champions",
            League::UefaEuropa => "soccer/uefa.europa",
            League::NcaaFootball => "football/college-football",
            League::NcaaMensBasketball => "basketball/mens-college-basketball",
        }
    }

    pub fn upstream_path(&self) -> UpstreamPath {
        UpstreamPath::new(self.path())
    }

    /// Wraps around in both directions so the UI can cycle through leagues.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|l| *l == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for League {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a league key is not in the supported table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLeague(pub String);

impl fmt::Display for UnknownLeague {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unsupported league: {}", self.0)
    }
}

impl std::error::Error for UnknownLeague {}

impl FromStr for League {
    type Err = UnknownLeague;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        League::ALL
            .iter()
            .copied()
            .find(|l| l.key() == wanted)
            .ok_or_else(|| UnknownLeague(s.to_owned()))
    }
}

/// Provider path segment identifying a sport/league pair, e.g. `football/nfl`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UpstreamPath(String);

impl UpstreamPath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into().trim_matches('/').to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<League> for UpstreamPath {
    fn from(league: League) -> Self {
        league.upstream_path()
    }
}

impl fmt::Display for UpstreamPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Scoreboard records
// ---------------------------------------------------------------------------

/// Score placeholder used when the provider omits a competitor score.
pub const MISSING_SCORE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum GameStatus {
    #[default]
    Scheduled,
    Live,
    Final,
}

impl GameStatus {
    /// Collapse ESPN's free-text `shortDetail` into a canonical status.
    ///
    /// Scheduled games carry a date/time range such as `8/12 - 7:00 PM`, so the
    /// `" - "` separator is what marks them. Anything else that isn't exactly
    /// `Final` is treated as in progress.
    pub fn from_short_detail(detail: &str) -> Self {
        if detail == "Final" {
            GameStatus::Final
        } else if detail.contains(" - ") {
            GameStatus::Scheduled
        } else {
            GameStatus::Live
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Live => "Live",
            GameStatus::Final => "Final",
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One game on one date, flattened from a scoreboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameRecord {
    pub game_id: String,
    pub date: NaiveDate,
    /// `07:30 PM ET`, or empty when the upstream timestamp had an unexpected shape.
    pub kickoff_time: String,
    pub status: GameStatus,
    pub home_team: String,
    pub away_team: String,
    pub home_score: String,
    pub away_score: String,
}

// ---------------------------------------------------------------------------
// Box score records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoxScoreRecord {
    pub teams: Vec<TeamLine>,
    pub team_stats: Vec<TeamStats>,
    pub player_stats: Vec<TeamPlayerStats>,
}

impl BoxScoreRecord {
    pub fn team_stats_for(&self, team: &str) -> Option<&[StatPair]> {
        self.team_stats
            .iter()
            .find(|t| t.team == team)
            .map(|t| t.stats.as_slice())
    }

    pub fn player_stats_for(&self, team: &str) -> Option<&[PlayerStatCategory]> {
        self.player_stats
            .iter()
            .find(|t| t.team == team)
            .map(|t| t.categories.as_slice())
    }

    /// Insert keyed by team name; a repeated name overwrites in place.
    pub(crate) fn insert_team_stats(&mut self, team: String, stats: Vec<StatPair>) {
        match self.team_stats.iter_mut().find(|t| t.team == team) {
            Some(existing) => existing.stats = stats,
            None => self.team_stats.push(TeamStats { team, stats }),
        }
    }

    pub(crate) fn insert_player_stats(&mut self, team: String, categories: Vec<PlayerStatCategory>) {
        match self.player_stats.iter_mut().find(|t| t.team == team) {
            Some(existing) => existing.categories = categories,
            None => self.player_stats.push(TeamPlayerStats { team, categories }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamLine {
    pub name: String,
    pub score: String,
    pub home_away: String, // "home" | "away"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    pub team: String,
    pub stats: Vec<StatPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamPlayerStats {
    pub team: String,
    pub categories: Vec<PlayerStatCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatPair {
    pub name: String,
    pub display_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerStatCategory {
    pub name: Option<String>,
    pub keys: Vec<String>,
    pub labels: Vec<String>,
    pub totals: Vec<String>,
    pub athletes: Vec<AthleteLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteLine {
    pub name: String,
    pub stats: AthleteStats,
}

/// Per-athlete stat values. ESPN sends named pairs for some sports and a bare
/// list of values (aligned with the category `labels`) for others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AthleteStats {
    Structured(Vec<StatPair>),
    Flat(Vec<String>),
}

impl Default for AthleteStats {
    fn default() -> Self {
        AthleteStats::Flat(Vec::new())
    }
}

impl AthleteStats {
    pub fn len(&self) -> usize {
        match self {
            AthleteStats::Structured(pairs) => pairs.len(),
            AthleteStats::Flat(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Display values in column order regardless of shape.
    pub fn values(&self) -> Vec<&str> {
        match self {
            AthleteStats::Structured(pairs) => pairs.iter().map(|p| p.display_value.as_str()).collect(),
            AthleteStats::Flat(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn league_keys_parse_case_insensitively() {
        for league in League::ALL {
            assert_eq!(league.key().parse::<League>(), Ok(league));
            assert_eq!(league.key().to_uppercase().parse::<League>(), Ok(league));
        }
        assert_eq!("NBA".parse::<League>(), "nba".parse::<League>());
        assert_eq!(" Premier-League ".parse::<League>(), Ok(League::PremierLeague));
    }

    #[test]
    fn unknown_league_keeps_original_input() {
        let err = "cricket".parse::<League>().unwrap_err();
        assert_eq!(err, UnknownLeague("cricket".into()));
    }

    #[test]
    fn league_paths_match_provider_segments() {
        assert_eq!(League::Nfl.upstream_path().as_str(), "football/nfl");
        assert_eq!(League::Mls.upstream_path().as_str(), "soccer/usa.1");
        assert_eq!(
            League::NcaaMensBasketball.upstream_path().as_str(),
            "basketball/mens-college-basketball"
        );
    }

    #[test]
    fn league_cycling_wraps() {
        assert_eq!(League::Nfl.prev(), League::NcaaMensBasketball);
        assert_eq!(League::NcaaMensBasketball.next(), League::Nfl);
        assert_eq!(League::Nfl.next(), League::Nba);
    }

    #[test]
    fn upstream_path_strips_slashes() {
        assert_eq!(UpstreamPath::new("/hockey/nhl/").as_str(), "hockey/nhl");
    }

    #[test]
    fn status_from_short_detail() {
        assert_eq!(GameStatus::from_short_detail("Final"), GameStatus::Final);
        assert_eq!(GameStatus::from_short_detail("8/12 - 7:00 PM"), GameStatus::Scheduled);
        assert_eq!(GameStatus::from_short_detail("Tue - 7:00 PM"), GameStatus::Scheduled);
        assert_eq!(GameStatus::from_short_detail("7:00 PM"), GameStatus::Live);
        assert_eq!(GameStatus::from_short_detail("Q3 - 4:12"), GameStatus::Scheduled);
        assert_eq!(GameStatus::from_short_detail("Final/OT"), GameStatus::Live);
    }

    #[test]
    fn repeated_team_stats_overwrite_in_place() {
        let mut record = BoxScoreRecord::default();
        record.insert_team_stats("A".into(), vec![]);
        record.insert_team_stats("B".into(), vec![]);
        record.insert_team_stats(
            "A".into(),
            vec![StatPair { name: "fg".into(), display_value: "40".into() }],
        );
        assert_eq!(record.team_stats.len(), 2);
        assert_eq!(record.team_stats[0].team, "A");
        assert_eq!(record.team_stats_for("A").map(|s| s.len()), Some(1));
    }

    #[test]
    fn athlete_values_follow_shape() {
        let flat = AthleteStats::Flat(vec!["10".into(), "3".into()]);
        let structured = AthleteStats::Structured(vec![StatPair {
            name: "points".into(),
            display_value: "10".into(),
        }]);
        assert_eq!(flat.values(), vec!["10", "3"]);
        assert_eq!(structured.values(), vec!["10"]);
        assert!(AthleteStats::default().is_empty());
    }
}
