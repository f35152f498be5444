// clubcal library
// Calendar aggregation engine plus the store, storage and admin layers around it

pub mod calendar;
pub mod clock;
pub mod command_handlers;
pub mod config;
pub mod dashboard;
pub mod database;
pub mod error;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui_state;
pub mod utils;

// Re-export commonly used types
pub use calendar::{
    bucket_by_month, build_annual_grid, compute_metrics, filter_by_category, select_upcoming,
    AnnualGrid, DateIssue, Metrics, MonthBuckets, Upcoming,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use command_handlers::AdminHandlers;
pub use config::AppConfig;
pub use dashboard::{build_dashboard, CalendarData, Dashboard, EventCard};
pub use database::Database;
pub use error::{AppError, AppResult};
pub use models::*;
pub use storage::{FileStorage, LocalFileStorage};
pub use store::{CalendarStore, SnapshotStore};
pub use ui_state::{UiState, View};
