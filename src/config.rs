use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use tracing_subscriber::EnvFilter;

use crate::error::{LottoError, Result};

pub const DEFAULT_DATABASE_URL: &str = "data/lottery.db";
pub const DEFAULT_SOURCE_URL: &str = "https://news.sanook.com/lotto/check";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_BATCH_DELAY_MS: u64 = 1000;
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database_url: String,
    pub source_base_url: String,
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    /// Draw dates whose page lives somewhere other than the computed URL.
    pub url_overrides: HashMap<NaiveDate, String>,
    pub batch_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            source_base_url: DEFAULT_SOURCE_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            url_overrides: HashMap::new(),
            batch_delay_ms: DEFAULT_BATCH_DELAY_MS,
        }
    }
}

/// Loads `.env` when present, then reads the process environment.
pub fn load() -> Result<Config> {
    dotenvy::dotenv().ok();
    from_lookup(|key| env::var(key).ok())
}

pub fn from_lookup<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(path) = non_empty(lookup("LOTTERY_DB_PATH")) {
        config.database_url = path;
    }
    if let Some(url) = non_empty(lookup("LOTTERY_SOURCE_URL")) {
        config.source_base_url = url.trim_end_matches('/').to_string();
    }
    if let Some(agent) = non_empty(lookup("LOTTERY_USER_AGENT")) {
        config.user_agent = agent;
    }
    if let Some(raw) = non_empty(lookup("LOTTERY_FETCH_TIMEOUT_SECS")) {
        let secs: u64 = raw.trim().parse().map_err(|_| {
            LottoError::Config(format!("LOTTERY_FETCH_TIMEOUT_SECS is not a number: {raw}"))
        })?;
        if !(1..=120).contains(&secs) {
            return Err(LottoError::Config(format!(
                "LOTTERY_FETCH_TIMEOUT_SECS must be between 1 and 120, got {secs}"
            )));
        }
        config.fetch_timeout_secs = secs;
    }
    if let Some(raw) = non_empty(lookup("LOTTERY_BATCH_DELAY_MS")) {
        config.batch_delay_ms = raw.trim().parse().map_err(|_| {
            LottoError::Config(format!("LOTTERY_BATCH_DELAY_MS is not a number: {raw}"))
        })?;
    }
    if let Some(raw) = non_empty(lookup("LOTTERY_URL_OVERRIDES")) {
        config.url_overrides = parse_url_overrides(&raw)?;
    }

    Ok(config)
}

/// Parses `2025-06-01=https://...;2025-10-16=https://...`.
pub fn parse_url_overrides(raw: &str) -> Result<HashMap<NaiveDate, String>> {
    let mut overrides = HashMap::new();
    for pair in raw.split([',', ';']).map(str::trim).filter(|p| !p.is_empty()) {
        let (date, url) = pair
            .split_once('=')
            .ok_or_else(|| LottoError::Config(format!("url override without '=': {pair}")))?;
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|_| LottoError::Config(format!("bad date in url override: {pair}")))?;
        let url = url.trim();
        if url.is_empty() {
            return Err(LottoError::Config(format!("empty url in override: {pair}")));
        }
        overrides.insert(date, url.to_string());
    }
    Ok(overrides)
}

/// Log filter from a `RUST_LOG`-style directive string, `info` when unset or
/// unparsable.
pub fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = from_lookup(|_| None).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.fetch_timeout_secs, 15);
        assert!(config.url_overrides.is_empty());
    }

    #[test]
    fn test_reads_overrides_and_timeout() {
        let config = from_lookup(lookup_from(&[
            ("LOTTERY_DB_PATH", "/tmp/l.db"),
            ("LOTTERY_SOURCE_URL", "https://example.test/lotto/"),
            ("LOTTERY_FETCH_TIMEOUT_SECS", "30"),
            (
                "LOTTERY_URL_OVERRIDES",
                "2025-06-01=https://example.test/a/; 2025-10-16=https://example.test/b/",
            ),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "/tmp/l.db");
        assert_eq!(config.source_base_url, "https://example.test/lotto");
        assert_eq!(config.fetch_timeout_secs, 30);
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert_eq!(config.url_overrides[&date], "https://example.test/a/");
        assert_eq!(config.url_overrides.len(), 2);
    }

    #[test]
    fn test_rejects_malformed_values() {
        assert!(from_lookup(lookup_from(&[("LOTTERY_FETCH_TIMEOUT_SECS", "soon")])).is_err());
        assert!(from_lookup(lookup_from(&[("LOTTERY_FETCH_TIMEOUT_SECS", "0")])).is_err());
        assert!(parse_url_overrides("2025-06-01 https://x").is_err());
        assert!(parse_url_overrides("2025-13-01=https://x").is_err());
    }

    #[test]
    fn test_log_filter_honours_directives() {
        use tracing::level_filters::LevelFilter;

        assert_eq!(log_filter(None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            log_filter(Some("debug")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
        assert_eq!(
            log_filter(Some("lottery_lib=trace")).max_level_hint(),
            Some(LevelFilter::TRACE)
        );
    }
}
