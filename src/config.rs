use crate::dates::{normalize, DateError};
use chrono::NaiveDate;
use std::env;

const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Pins "today" for every calculation when set (`HABIT_TODAY`).
    pub anchor_day: Option<NaiveDate>,
}

impl Config {
    pub fn from_env() -> Result<Self, DateError> {
        Self::from_vars(env::var("PORT").ok(), env::var("HABIT_TODAY").ok())
    }

    fn from_vars(port: Option<String>, anchor_day: Option<String>) -> Result<Self, DateError> {
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let anchor_day = match anchor_day.filter(|value| !value.trim().is_empty()) {
            Some(value) => Some(normalize(&value)?),
            None => None,
        };

        Ok(Self { port, anchor_day })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_vars() {
        let config = Config::from_vars(None, None).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.anchor_day, None);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = Config::from_vars(Some("http".to_string()), None).unwrap();
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn anchor_day_is_normalized() {
        let config = Config::from_vars(
            Some("3000".to_string()),
            Some("2026-01-05T18:00:00".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.anchor_day, NaiveDate::from_ymd_opt(2026, 1, 5));
    }

    #[test]
    fn invalid_anchor_day_is_rejected() {
        assert!(Config::from_vars(None, Some("soon".to_string())).is_err());
    }
}
