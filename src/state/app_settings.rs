use chrono::NaiveDate;
use log::LevelFilter;
use sportsboard_api::League;
use sportsboard_api::client::{ClientConfig, parse_query_date, today_eastern};

pub const LEAGUE_ENV: &str = "SPORTSBOARD_LEAGUE";
pub const LOG_ENV: &str = "SPORTSBOARD_LOG";
pub const API_BASE_ENV: &str = "SPORTSBOARD_API_BASE";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: LevelFilter,
    pub league: League,
    pub date: NaiveDate,
    pub api_base: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: LevelFilter::Info,
            league: League::default(),
            date: today_eastern(),
            api_base: None,
        }
    }
}

/// What the command line asked for.
#[derive(Debug)]
pub enum CliAction {
    Run(AppSettings),
    Help,
    Version,
    ListLeagues,
}

impl AppSettings {
    /// Read settings from the process arguments and environment.
    pub fn load() -> Result<CliAction, String> {
        Self::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
    }

    /// Flags override environment variables, which override defaults.
    pub fn parse<I, E>(args: I, env: E) -> Result<CliAction, String>
    where
        I: IntoIterator<Item = String>,
        E: Fn(&str) -> Option<String>,
    {
        let mut settings = AppSettings::default();

        if let Some(league) = env(LEAGUE_ENV).filter(|v| !v.trim().is_empty()) {
            settings.league = parse_league(&league)?;
        }
        if let Some(level) = env(LOG_ENV).filter(|v| !v.trim().is_empty()) {
            settings.log_level = parse_level(&level)?;
        }
        settings.api_base = env(API_BASE_ENV).filter(|v| !v.trim().is_empty());

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(CliAction::Help),
                "-V" | "--version" => return Ok(CliAction::Version),
                "--leagues" => return Ok(CliAction::ListLeagues),
                "-l" | "--league" => {
                    let value = args.next().ok_or("--league needs a value")?;
                    settings.league = parse_league(&value)?;
                }
                "-d" | "--date" => {
                    let value = args.next().ok_or("--date needs a value")?;
                    settings.date = parse_query_date(&value).map_err(|e| e.to_string())?;
                }
                "--log-level" => {
                    let value = args.next().ok_or("--log-level needs a value")?;
                    settings.log_level = parse_level(&value)?;
                }
                "-f" | "--full-screen" => settings.full_screen = true,
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }

        Ok(CliAction::Run(settings))
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::default();
        if let Some(base) = &self.api_base {
            config.base_url = base.trim_end_matches('/').to_owned();
        }
        config
    }
}

fn parse_league(raw: &str) -> Result<League, String> {
    raw.parse::<League>()
        .map_err(|e| format!("{e} (try --leagues)"))
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| format!("invalid log level: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn run(action: CliAction) -> AppSettings {
        match action {
            CliAction::Run(settings) => settings,
            other => panic!("expected Run, got {other:?}"),
        }
    }

    #[test]
    fn defaults_to_nba_today() {
        let settings = run(AppSettings::parse(args(&[]), no_env).unwrap());
        assert_eq!(settings.league, League::Nba);
        assert_eq!(settings.log_level, LevelFilter::Info);
        assert!(settings.api_base.is_none());
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            LEAGUE_ENV => Some("nhl".to_string()),
            LOG_ENV => Some("debug".to_string()),
            _ => None,
        };
        let settings = run(
            AppSettings::parse(args(&["--league", "LA-LIGA", "--date", "20240302"]), env).unwrap(),
        );
        assert_eq!(settings.league, League::LaLiga);
        assert_eq!(settings.date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(settings.log_level, LevelFilter::Debug);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(AppSettings::parse(args(&["--league", "xfl"]), no_env).is_err());
        assert!(AppSettings::parse(args(&["--date", "2024-03-02"]), no_env).is_err());
        assert!(AppSettings::parse(args(&["--date"]), no_env).is_err());
        assert!(AppSettings::parse(args(&["--bogus"]), no_env).is_err());
    }

    #[test]
    fn info_flags_short_circuit() {
        assert!(matches!(AppSettings::parse(args(&["--help"]), no_env), Ok(CliAction::Help)));
        assert!(matches!(AppSettings::parse(args(&["-V"]), no_env), Ok(CliAction::Version)));
        assert!(matches!(
            AppSettings::parse(args(&["--leagues"]), no_env),
            Ok(CliAction::ListLeagues)
        ));
    }

    #[test]
    fn api_base_override_reaches_client_config() {
        let env = |key: &str| (key == API_BASE_ENV).then(|| "http://localhost:9000/".to_string());
        let settings = run(AppSettings::parse(args(&[]), env).unwrap());
        assert_eq!(settings.client_config().base_url, "http://localhost:9000");
    }
}
