use crate::dates::today;
use chrono::NaiveDate;

pub fn completion_percentage_today(completion_count: u64, created_at: NaiveDate) -> u32 {
    completion_percentage(completion_count, created_at, today())
}

/// Share of days since `created_at` (both ends inclusive) that have a
/// completion, rounded half-up to a whole percent.
///
/// Not clamped: more completions than days gives more than 100.
pub fn completion_percentage(completion_count: u64, created_at: NaiveDate, today: NaiveDate) -> u32 {
    if completion_count == 0 {
        return 0;
    }

    let total_days = (today - created_at).num_days() + 1;
    if total_days <= 0 {
        return 0;
    }

    let total_days = total_days as u128;
    let scaled = u128::from(completion_count) * 200 + total_days;
    let percent = scaled / (total_days * 2);
    u32::try_from(percent).unwrap_or(u32::MAX)
}
