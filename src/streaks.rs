use crate::dates::today;
use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HabitStreaks {
    pub current: u32,
    pub longest: u32,
}

impl HabitStreaks {
    pub fn from_days(days: &[NaiveDate], today: NaiveDate) -> Self {
        Self {
            current: current_streak(days, today),
            longest: longest_streak(days),
        }
    }
}

pub fn current_streak_today(days: &[NaiveDate]) -> u32 {
    current_streak(days, today())
}

/// Consecutive days with a completion, counted back from `today` or, when
/// today has none yet, from yesterday. Any gap ends the count.
///
/// `days` may be in any order but must not repeat a day.
pub fn current_streak(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let mut sorted = days.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    let Some(&latest) = sorted.first() else {
        return 0;
    };

    if latest != today && Some(latest) != today.pred_opt() {
        return 0;
    }
    let mut expected = latest;

    let mut streak = 0;
    for day in sorted {
        if day != expected {
            break;
        }
        streak += 1;
        match expected.pred_opt() {
            Some(previous) => expected = previous,
            None => break,
        }
    }
    streak
}

/// Longest run of consecutive calendar days anywhere in the history.
///
/// A repeated day reads as a break in the run, so callers dedup first
/// (see [`crate::dates::CompletionSet`]).
pub fn longest_streak(days: &[NaiveDate]) -> u32 {
    if days.is_empty() {
        return 0;
    }

    let mut sorted = days.to_vec();
    sorted.sort_unstable();

    let mut longest = 1;
    let mut current = 1;
    for pair in sorted.windows(2) {
        if pair[0].succ_opt() == Some(pair[1]) {
            current += 1;
        } else {
            longest = longest.max(current);
            current = 1;
        }
    }
    longest.max(current)
}
