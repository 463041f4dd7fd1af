use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/today", get(handlers::get_today))
        .route("/api/habits/stats", post(handlers::habit_stats))
        .route("/api/chart", post(handlers::chart))
        .with_state(state)
}
