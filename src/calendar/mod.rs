// Calendar aggregation engine.
// Pure functions over already-joined events; no I/O, no clock reads.

pub mod annual;
pub mod common;
pub mod filter;
pub mod metrics;
pub mod months;
pub mod upcoming;

pub use annual::{build_annual_grid, AnnualGrid, GridDay, GridMonth, Week};
pub use common::{month_name, month_names, parse_event_date, parse_event_time, DateIssue};
pub use filter::filter_by_category;
pub use metrics::{compute_metrics, compute_metrics_with_limit, CategoryCount, Metrics, TOP_CATEGORIES_LIMIT};
pub use months::{bucket_by_month, MonthBuckets};
pub use upcoming::{select_upcoming, RelativeDay, Upcoming, UpcomingEvent};
