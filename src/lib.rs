pub mod app;
pub mod config;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod rate;
pub mod series;
pub mod state;
pub mod streaks;

pub use app::router;
pub use config::Config;
pub use dates::{normalize, CompletionSet, DateError, DateLike};
pub use rate::completion_percentage;
pub use series::{aggregate_by_day, densify, ChartPeriod};
pub use state::AppState;
pub use streaks::{current_streak, longest_streak, HabitStreaks};
