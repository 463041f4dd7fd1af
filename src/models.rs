use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Cadence a habit is tracked at. Streaks are computed day by day for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HabitType {
    #[default]
    Daily,
    Weekly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
}

#[derive(Debug, Deserialize)]
pub struct HabitStatsRequest {
    pub created_at: String,
    #[serde(default)]
    pub habit_type: HabitType,
    #[serde(default)]
    pub completions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HabitStatsResponse {
    pub habit_type: HabitType,
    pub total_completions: u64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub completion_percentage: u32,
}

#[derive(Debug, Deserialize)]
pub struct ObservationInput {
    pub date: String,
    pub count: u64,
}

#[derive(Debug, Deserialize)]
pub struct ChartRequest {
    pub period: Option<String>,
    #[serde(default)]
    pub observations: Vec<ObservationInput>,
    #[serde(default)]
    pub completions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ChartResponse {
    pub period: String,
    pub days: u32,
    pub points: Vec<ChartPoint>,
}
