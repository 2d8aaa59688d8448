/// ESPN API raw wire types: serde shapes for deserializing ESPN responses.
/// These map to our clean domain types in client.rs. Every field is optional;
/// required-ness is decided by the mapping, not by serde.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Scoreboard  (site v2 API)
// ---------------------------------------------------------------------------

/// Events stay as raw JSON so one malformed entry can't fail the whole batch.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct ScoreboardResponse {
    pub events: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnEvent {
    pub id: Option<String>,
    pub date: Option<String>, // "2024-01-15T01:00Z"
    pub status: Option<EspnStatus>,
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatus {
    #[serde(rename = "type")]
    pub status_type: Option<EspnStatusType>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatusType {
    #[serde(rename = "shortDetail")]
    pub short_detail: Option<String>, // "Final", "8/12 - 7:00 PM", "Q3 4:12"
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnCompetition {
    pub competitors: Option<Vec<EspnCompetitor>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnCompetitor {
    #[serde(rename = "homeAway")]
    pub home_away: Option<String>, // "home" | "away"
    pub team: Option<EspnTeam>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub score: Option<String>, // usually a string, occasionally a bare number
}

impl EspnCompetitor {
    pub fn display_name(&self) -> Option<&str> {
        self.team.as_ref().and_then(|t| t.display_name.as_deref())
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeam {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Game summary  (site v2 API)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize, Default, Clone)]
pub struct SummaryResponse {
    pub header: Option<EspnHeader>,
    pub boxscore: Option<EspnBoxscore>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnHeader {
    pub competitions: Option<Vec<EspnCompetition>>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct EspnBoxscore {
    pub teams: Option<Vec<EspnTeamStatistics>>,
    pub players: Option<Vec<EspnTeamPlayers>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeamStatistics {
    pub team: Option<EspnTeam>,
    pub statistics: Option<Vec<EspnStatPair>>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct EspnStatPair {
    pub name: Option<String>,
    #[serde(rename = "displayValue", default, deserialize_with = "lenient_string")]
    pub display_value: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnTeamPlayers {
    pub team: Option<EspnTeam>,
    pub statistics: Option<Vec<EspnStatCategory>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnStatCategory {
    pub name: Option<String>,
    pub athletes: Option<Vec<EspnAthleteStats>>,
    #[serde(default, deserialize_with = "lenient_optional_strings")]
    pub totals: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_optional_strings")]
    pub keys: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_optional_strings")]
    pub labels: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnAthleteStats {
    pub athlete: Option<EspnAthlete>,
    pub stats: Option<EspnStatValues>,
}

/// Athlete stats come either as named pairs or as a flat list aligned with
/// the category labels, depending on the sport.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum EspnStatValues {
    Structured(Vec<EspnStatPair>),
    Flat(#[serde(deserialize_with = "lenient_strings")] Vec<String>),
}

#[derive(Debug, Deserialize, Clone)]
pub struct EspnAthlete {
    #[serde(rename = "displayName")]
    pub display_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Lenient scalars
// ---------------------------------------------------------------------------

fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(value) => Some(value_text(value)),
    })
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    Ok(values.into_iter().map(value_text).collect())
}

fn lenient_optional_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(values.map(|v| v.into_iter().map(value_text).collect()))
}
