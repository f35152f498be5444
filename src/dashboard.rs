//! One render's worth of calendar data.
//!
//! The calendar body honors the category filter; metrics and the upcoming
//! list always cover every event.

use crate::calendar::{
    bucket_by_month, build_annual_grid, compute_metrics_with_limit, filter_by_category, month_name,
    month_names, select_upcoming, AnnualGrid, DateIssue, Metrics,
};
use crate::clock::Clock;
use crate::error::AppResult;
use crate::models::{Category, EventWithJoins, Settings, WeekStart};
use crate::store::CalendarStore;
use crate::ui_state::{UiState, View};
use crate::utils::logging::log_date_issues;
use chrono::NaiveDate;
use serde::Serialize;

/// An event as a card shows it: type, colors and time already resolved.
#[derive(Debug, Clone, Serialize)]
pub struct EventCard<'a> {
    pub event: &'a EventWithJoins,
    /// Empty when the event has neither a type nor a legacy type.
    pub display_type: &'a str,
    pub type_color: String,
    pub category_color: String,
    /// `HH:MM`.
    pub time: Option<&'a str>,
}

impl<'a> EventCard<'a> {
    pub fn new(event: &'a EventWithJoins, settings: &Settings) -> Self {
        Self {
            event,
            display_type: event.display_type(),
            type_color: event.display_type_color(&settings.default_type_color).to_string(),
            category_color: event.category_color(&settings.default_category_color).to_string(),
            time: event.short_time(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthSection<'a> {
    /// 0-based month index.
    pub index: usize,
    pub name: &'static str,
    pub events: Vec<EventCard<'a>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum CalendarBody<'a> {
    Monthly { months: Vec<MonthSection<'a>> },
    Annual {
        grid: AnnualGrid<'a>,
        week_start: WeekStart,
        month_names: [&'static str; 12],
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingCard<'a> {
    pub card: EventCard<'a>,
    pub date: NaiveDate,
    pub days_until: i64,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a> {
    pub today: NaiveDate,
    pub year: i32,
    pub selected_category: Option<&'a Category>,
    pub calendar: CalendarBody<'a>,
    pub metrics: Metrics,
    pub upcoming: Vec<UpcomingCard<'a>>,
    /// Events left out of the date-based views.
    pub issues: Vec<DateIssue>,
}

/// Compose the page for `state` as of `today`.
pub fn build_dashboard<'a>(
    events: &'a [EventWithJoins],
    categories: &'a [Category],
    state: &UiState,
    settings: &Settings,
    today: NaiveDate,
) -> Dashboard<'a> {
    let selected_id = state.selected_category.as_deref();
    let filtered = filter_by_category(events, selected_id);

    let calendar = match state.view {
        View::Monthly => {
            let buckets = bucket_by_month(filtered, state.year);
            let months = buckets
                .iter()
                .map(|(index, bucket)| MonthSection {
                    index,
                    name: month_name(settings.locale, index),
                    events: bucket.iter().map(|&event| EventCard::new(event, settings)).collect(),
                })
                .collect();
            CalendarBody::Monthly { months }
        }
        View::Annual => CalendarBody::Annual {
            grid: build_annual_grid(filtered, state.year),
            week_start: settings.week_start,
            month_names: month_names(settings.locale),
        },
    };

    // Issues of the filtered view are a subset of these.
    let mut metrics =
        compute_metrics_with_limit(events, categories, today, settings.top_categories_limit);
    let issues = std::mem::take(&mut metrics.issues);
    log_date_issues("Dashboard", &issues);

    let upcoming = select_upcoming(events, settings.upcoming_limit, today)
        .entries
        .into_iter()
        .map(|entry| UpcomingCard {
            card: EventCard::new(entry.event, settings),
            date: entry.date,
            days_until: entry.days_until,
            label: entry.relative.label(settings.locale),
        })
        .collect();

    Dashboard {
        today,
        year: state.year,
        selected_category: selected_id.and_then(|id| categories.iter().find(|c| c.id == id)),
        calendar,
        metrics,
        upcoming,
        issues,
    }
}

/// Owned copy of everything a dashboard is built from.
#[derive(Debug, Clone, Default)]
pub struct CalendarData {
    pub events: Vec<EventWithJoins>,
    pub categories: Vec<Category>,
}

impl CalendarData {
    pub async fn load<S: CalendarStore>(store: &S) -> AppResult<Self> {
        let categories = store.fetch_categories().await?;
        let events = store.fetch_events().await?;
        log::info!("Loaded {} events in {} categories", events.len(), categories.len());
        Ok(Self { events, categories })
    }

    pub fn dashboard<C: Clock>(&self, state: &UiState, settings: &Settings, clock: &C) -> Dashboard<'_> {
        build_dashboard(&self.events, &self.categories, state, settings, clock.today())
    }
}
