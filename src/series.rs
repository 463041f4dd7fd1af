use crate::models::{ChartPoint, DailyObservation};
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Chart window presets. Unknown tokens fall back to 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPeriod {
    Week,
    #[default]
    Month,
    Quarter,
}

impl ChartPeriod {
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "7d" => Self::Week,
            "30d" => Self::Month,
            "90d" => Self::Quarter,
            _ => Self::default(),
        }
    }

    pub fn days(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Self::Week => "7d",
            Self::Month => "30d",
            Self::Quarter => "90d",
        }
    }
}

/// Counts completion days (possibly from several habits) per calendar day.
/// Only days that occur appear in the result.
pub fn aggregate_by_day<I>(days: I) -> Vec<DailyObservation>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut counts: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for day in days {
        let entry = counts.entry(day).or_default();
        *entry = entry.saturating_add(1);
    }

    counts
        .into_iter()
        .map(|(date, count)| DailyObservation { date, count })
        .collect()
}

/// One point per day for the `window_days` days ending at `anchor`, oldest
/// first. Days without an observation get 0; repeated days are summed.
///
/// A window reaching past `NaiveDate::MIN` is cut at the first representable day.
pub fn densify(observations: &[DailyObservation], window_days: u32, anchor: NaiveDate) -> Vec<ChartPoint> {
    let mut lookup: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    for observation in observations {
        let entry = lookup.entry(observation.date).or_default();
        *entry = entry.saturating_add(observation.count);
    }

    let reachable = (anchor - NaiveDate::MIN).num_days() + 1;
    let window = i64::from(window_days).min(reachable);

    let mut points = Vec::with_capacity(usize::try_from(window).unwrap_or_default());
    for offset in (0..window).rev() {
        let Some(date) = anchor.checked_sub_days(Days::new(offset as u64)) else {
            continue;
        };
        points.push(ChartPoint {
            label: day_label(date),
            value: lookup.get(&date).copied().unwrap_or_default(),
        });
    }
    points
}

fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()
    }

    #[test]
    fn empty_observations_fill_window_with_zeros() {
        let points = densify(&[], 7, anchor());
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|point| point.value == 0));
        assert_eq!(points.first().map(|p| p.label.as_str()), Some("Dec 30"));
        assert_eq!(points.last().map(|p| p.label.as_str()), Some("Jan 5"));
    }

    #[test]
    fn single_day_window_reports_its_count() {
        let observations = [DailyObservation { date: anchor(), count: 3 }];
        let points = densify(&observations, 1, anchor());
        assert_eq!(
            points,
            vec![ChartPoint {
                label: "Jan 5".to_string(),
                value: 3
            }]
        );
    }

    #[test]
    fn gaps_are_filled_in_chronological_order() {
        let observations = [
            DailyObservation { date: anchor(), count: 1 },
            DailyObservation { date: anchor() - Duration::days(2), count: 4 },
        ];
        let values: Vec<u64> = densify(&observations, 4, anchor())
            .into_iter()
            .map(|point| point.value)
            .collect();
        assert_eq!(values, vec![0, 4, 0, 1]);
    }

    #[test]
    fn observations_outside_window_are_ignored() {
        let observations = [
            DailyObservation { date: anchor() - Duration::days(10), count: 9 },
            DailyObservation { date: anchor() + Duration::days(1), count: 9 },
        ];
        let points = densify(&observations, 7, anchor());
        assert_eq!(points.iter().map(|p| p.value).sum::<u64>(), 0);
    }

    #[test]
    fn repeated_days_are_summed() {
        let observations = [
            DailyObservation { date: anchor(), count: 2 },
            DailyObservation { date: anchor(), count: 5 },
        ];
        assert_eq!(densify(&observations, 1, anchor())[0].value, 7);
    }

    #[test]
    fn zero_window_is_empty() {
        assert!(densify(&[], 0, anchor()).is_empty());
    }

    #[test]
    fn window_past_minimum_date_is_cut_short() {
        let anchor = NaiveDate::MIN + Duration::days(2);
        let observations = [DailyObservation { date: NaiveDate::MIN, count: 4 }];

        let points = densify(&observations, 5, anchor);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].value, 4);
        assert_eq!(points[2].label, day_label(anchor));

        let points = densify(&[], u32::MAX, NaiveDate::MIN);
        assert_eq!(points.len(), 1);
    }

    #[test]
    fn aggregate_counts_each_day_across_habits() {
        let yesterday = anchor() - Duration::days(1);
        let observations = aggregate_by_day([anchor(), yesterday, anchor()]);
        assert_eq!(
            observations,
            vec![
                DailyObservation { date: yesterday, count: 1 },
                DailyObservation { date: anchor(), count: 2 },
            ]
        );
    }

    #[test]
    fn period_tokens_map_to_day_counts() {
        assert_eq!(ChartPeriod::from_token("7d").days(), 7);
        assert_eq!(ChartPeriod::from_token("30d").days(), 30);
        assert_eq!(ChartPeriod::from_token("90d").days(), 90);
        assert_eq!(ChartPeriod::from_token("1y"), ChartPeriod::Month);
        assert_eq!(ChartPeriod::from_token("").days(), 30);
        assert_eq!(ChartPeriod::Quarter.token(), "90d");
    }
}
