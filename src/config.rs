use std::str::FromStr;

use tracing::debug;

use crate::shared::AppError;

/// Process configuration, read once at startup and passed to constructors
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub riot_api_key: String,
    pub bind_addr: String,
    pub database_url: Option<String>,
    pub season_start_epoch: i64,
    pub season_label: String,
    pub max_matches: usize,
    /// Match cap for the season summary, which reads the whole season
    pub summary_max_matches: usize,
    pub mastery_top_n: usize,
    pub riot_max_retries: u32,
    pub riot_fetch_concurrency: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            riot_api_key: String::new(),
            bind_addr: "0.0.0.0:3000".to_string(),
            database_url: None,
            // January 1, 2025 00:00 UTC
            season_start_epoch: 1_735_689_600,
            season_label: "2025".to_string(),
            max_matches: 20,
            summary_max_matches: 300,
            mastery_top_n: 5,
            riot_max_retries: 3,
            riot_fetch_concurrency: 4,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the environment. `RIOT_API_KEY` is required;
    /// everything else falls back to [`AppConfig::default`].
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let riot_api_key = lookup("RIOT_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::Config("RIOT_API_KEY must be set".to_string()))?;

        let config = Self {
            riot_api_key,
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            database_url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            season_start_epoch: parse_or(&lookup, "SEASON_START_EPOCH", defaults.season_start_epoch),
            season_label: lookup("SEASON_LABEL").unwrap_or(defaults.season_label),
            max_matches: parse_or(&lookup, "MAX_MATCHES", defaults.max_matches),
            summary_max_matches: parse_or(
                &lookup,
                "SUMMARY_MAX_MATCHES",
                defaults.summary_max_matches,
            ),
            mastery_top_n: parse_or(&lookup, "MASTERY_TOP_N", defaults.mastery_top_n),
            riot_max_retries: parse_or(&lookup, "RIOT_MAX_RETRIES", defaults.riot_max_retries),
            riot_fetch_concurrency: parse_or(
                &lookup,
                "RIOT_FETCH_CONCURRENCY",
                defaults.riot_fetch_concurrency,
            ),
        };

        debug!(
            bind_addr = %config.bind_addr,
            persistent_store = config.database_url.is_some(),
            max_matches = config.max_matches,
            mastery_top_n = config.mastery_top_n,
            "Loaded configuration"
        );

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
