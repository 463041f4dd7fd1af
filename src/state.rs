use crate::config::Config;
use crate::dates;
use chrono::NaiveDate;

/// Source of "today" for request handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clock {
    System,
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(self) -> NaiveDate {
        match self {
            Self::System => dates::today(),
            Self::Fixed(day) => day,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let clock = match config.anchor_day {
            Some(day) => Clock::Fixed(day),
            None => Clock::System,
        };
        Self { clock }
    }
}
