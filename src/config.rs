//! Application Config
//!
//! Fixed settings with an optional `?log=<level>` override from the URL.

use log::LevelFilter;

/// Preset donation amounts in dollars
pub const DONATION_PRESETS: &[u32] = &[25, 50, 100, 250, 500, 1000];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    /// How long a toast stays on screen
    pub toast_duration_ms: u32,
    pub donation_presets: &'static [u32],
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            toast_duration_ms: 4000,
            donation_presets: DONATION_PRESETS,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, adjusted by the page's query string
    pub fn from_location() -> Self {
        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        if let Some(level) = query_param(query, "log").and_then(parse_log_level) {
            config.log_level = level;
        }
        config
    }
}

/// Value of `key` in a `?a=1&b=2` query string
fn query_param<'a>(query: &'a str, key: &str) -> Option<&'a str> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

pub fn parse_log_level(value: &str) -> Option<LevelFilter> {
    value.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.toast_duration_ms, 4000);
        assert_eq!(config.donation_presets, &[25, 50, 100, 250, 500, 1000]);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_from_query() {
        assert_eq!(AppConfig::from_query("?log=debug").log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::from_query("?x=1&log=WARN").log_level, LevelFilter::Warn);
        assert_eq!(AppConfig::from_query("?log=loud").log_level, LevelFilter::Info);
        assert_eq!(AppConfig::from_query("").log_level, LevelFilter::Info);
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_log_level("trace"), Some(LevelFilter::Trace));
        assert_eq!(parse_log_level(""), None);
    }
}
