use crate::dates::{normalize, CompletionSet, DateError};
use crate::errors::AppError;
use crate::models::{
    ChartRequest, ChartResponse, DailyObservation, HabitStatsRequest, HabitStatsResponse,
    TodayResponse,
};
use crate::rate::completion_percentage;
use crate::series::{aggregate_by_day, densify, ChartPeriod};
use crate::state::AppState;
use crate::streaks::HabitStreaks;
use axum::{extract::State, Json};
use tracing::{debug, warn};

pub async fn get_today(State(state): State<AppState>) -> Json<TodayResponse> {
    Json(TodayResponse {
        date: state.clock.today().to_string(),
    })
}

pub async fn habit_stats(
    State(state): State<AppState>,
    Json(payload): Json<HabitStatsRequest>,
) -> Result<Json<HabitStatsResponse>, AppError> {
    let today = state.clock.today();
    let created_at = normalize(&payload.created_at)
        .inspect_err(|err| warn!("rejected created_at: {err}"))?;
    let completions = CompletionSet::from_dates(&payload.completions)
        .inspect_err(|err| warn!("rejected completion: {err}"))?;

    let streaks = HabitStreaks::from_days(completions.days(), today);
    let total_completions = completions.len() as u64;
    let completion_percentage = completion_percentage(total_completions, created_at, today);

    debug!(
        total_completions,
        current = streaks.current,
        longest = streaks.longest,
        completion_percentage,
        "computed habit stats"
    );

    Ok(Json(HabitStatsResponse {
        habit_type: payload.habit_type,
        total_completions,
        current_streak: streaks.current,
        longest_streak: streaks.longest,
        completion_percentage,
    }))
}

pub async fn chart(
    State(state): State<AppState>,
    Json(payload): Json<ChartRequest>,
) -> Result<Json<ChartResponse>, AppError> {
    let period = ChartPeriod::from_token(payload.period.as_deref().unwrap_or_default());

    let mut observations = payload
        .observations
        .iter()
        .map(|input| {
            Ok(DailyObservation {
                date: normalize(&input.date)?,
                count: input.count,
            })
        })
        .collect::<Result<Vec<_>, DateError>>()
        .inspect_err(|err| warn!("rejected observation: {err}"))?;

    let completion_days = payload
        .completions
        .iter()
        .map(normalize)
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| warn!("rejected completion: {err}"))?;
    observations.extend(aggregate_by_day(completion_days));

    let points = densify(&observations, period.days(), state.clock.today());
    debug!(period = period.token(), observations = observations.len(), "built chart series");

    Ok(Json(ChartResponse {
        period: period.token().to_string(),
        days: period.days(),
        points,
    }))
}
