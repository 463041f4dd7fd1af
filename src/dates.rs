use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("invalid date: {0:?}")]
    InvalidDate(String),
}

/// Anything that can be reduced to a local calendar day.
pub trait DateLike {
    fn to_day(&self) -> Result<NaiveDate, DateError>;
}

impl DateLike for NaiveDate {
    fn to_day(&self) -> Result<NaiveDate, DateError> {
        Ok(*self)
    }
}

impl DateLike for NaiveDateTime {
    fn to_day(&self) -> Result<NaiveDate, DateError> {
        Ok(self.date())
    }
}

impl<Tz: TimeZone> DateLike for DateTime<Tz> {
    fn to_day(&self) -> Result<NaiveDate, DateError> {
        Ok(self.with_timezone(&Local).date_naive())
    }
}

impl DateLike for str {
    fn to_day(&self) -> Result<NaiveDate, DateError> {
        parse_day(self)
    }
}

impl DateLike for String {
    fn to_day(&self) -> Result<NaiveDate, DateError> {
        parse_day(self)
    }
}

impl<T: DateLike + ?Sized> DateLike for &T {
    fn to_day(&self) -> Result<NaiveDate, DateError> {
        (**self).to_day()
    }
}

/// Reduces a date-like value to its local calendar day.
///
/// Every timestamp goes through the `Local` wall clock before the time of day
/// is dropped, so values from different sources compare by equality.
pub fn normalize<D: DateLike + ?Sized>(value: &D) -> Result<NaiveDate, DateError> {
    value.to_day()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_day(input: &str) -> Result<NaiveDate, DateError> {
    let value = input.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(stamp) = DateTime::parse_from_rfc3339(value) {
        return stamp.to_day();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(stamp.date());
        }
    }

    Err(DateError::InvalidDate(input.to_string()))
}

/// Completion days for one habit: normalized, sorted ascending, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionSet {
    days: Vec<NaiveDate>,
}

impl CompletionSet {
    pub fn from_dates<I, D>(values: I) -> Result<Self, DateError>
    where
        I: IntoIterator<Item = D>,
        D: DateLike,
    {
        let unique = values
            .into_iter()
            .map(|value| normalize(&value))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            days: unique.into_iter().collect(),
        })
    }

    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
