use super::common::{dated_events, same_month, DateIssue};
use crate::models::{Category, EventWithJoins};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const TOP_CATEGORIES_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category_id: String,
    pub name: String,
    pub color: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub total_events: usize,
    pub events_this_month: usize,
    pub top_categories: Vec<CategoryCount>,
    /// Events whose category reference matches no known category.
    pub uncategorized: usize,
    pub issues: Vec<DateIssue>,
}

/// Summary figures for the whole (unfiltered) event collection.
///
/// `now` decides which month counts as current. Top categories use the
/// default limit of five.
pub fn compute_metrics(events: &[EventWithJoins], categories: &[Category], now: NaiveDate) -> Metrics {
    compute_metrics_with_limit(events, categories, now, TOP_CATEGORIES_LIMIT)
}

/// Same as [`compute_metrics`] with a caller-chosen top-categories limit.
///
/// Categories without events are dropped. Equal counts keep the order in
/// which `categories` lists them.
pub fn compute_metrics_with_limit(
    events: &[EventWithJoins],
    categories: &[Category],
    now: NaiveDate,
    limit: usize,
) -> Metrics {
    let (dated, issues) = dated_events(events);
    let events_this_month = dated.iter().filter(|(date, _)| same_month(*date, now)).count();

    let mut per_category: HashMap<&str, usize> = HashMap::new();
    for event in events {
        *per_category.entry(event.category_id()).or_insert(0) += 1;
    }

    let known: HashSet<&str> = categories.iter().map(|c| c.id.as_str()).collect();
    let uncategorized = events
        .iter()
        .filter(|event| !known.contains(event.category_id()))
        .count();

    let mut top_categories: Vec<CategoryCount> = categories
        .iter()
        .filter_map(|category| {
            let count = per_category.get(category.id.as_str()).copied().unwrap_or(0);
            (count > 0).then(|| CategoryCount {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                count,
            })
        })
        .collect();

    // Stable sort: ties stay in `categories` order.
    top_categories.sort_by(|a, b| b.count.cmp(&a.count));
    top_categories.truncate(limit);

    Metrics {
        total_events: events.len(),
        events_this_month,
        top_categories,
        uncategorized,
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;

    fn event(id: &str, date: &str, category_id: &str) -> EventWithJoins {
        EventWithJoins::new(Event::new(id, id, date, category_id), None, None)
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let metrics = compute_metrics(&[], &[], today());
        assert_eq!(metrics.total_events, 0);
        assert_eq!(metrics.events_this_month, 0);
        assert!(metrics.top_categories.is_empty());
        assert_eq!(metrics.uncategorized, 0);
    }

    #[test]
    fn test_this_month_uses_injected_now() {
        let events = vec![
            event("e1", "2026-03-01", "a"),
            event("e2", "2026-03-31", "a"),
            event("e3", "2025-03-10", "a"),
            event("e4", "2026-04-01", "a"),
        ];
        let metrics = compute_metrics(&events, &[], today());
        assert_eq!(metrics.total_events, 4);
        assert_eq!(metrics.events_this_month, 2);
    }

    #[test]
    fn test_top_categories_order_and_ties() {
        let a = Category::new("a", "A", "#111111");
        let b = Category::new("b", "B", "#222222");
        let c = Category::new("c", "C", "#333333");
        let empty = Category::new("z", "Empty", "#444444");
        let events = vec![
            event("1", "2026-01-01", "c"),
            event("2", "2026-01-02", "b"),
            event("3", "2026-01-03", "a"),
            event("4", "2026-01-04", "b"),
            event("5", "2026-01-05", "a"),
            event("6", "2026-01-06", "a"),
            event("7", "2026-01-07", "b"),
        ];

        let metrics = compute_metrics(&events, &[empty.clone(), c.clone(), a.clone(), b.clone()], today());
        let top: Vec<(&str, usize)> = metrics
            .top_categories
            .iter()
            .map(|entry| (entry.name.as_str(), entry.count))
            .collect();
        assert_eq!(top, vec![("A", 3), ("B", 3), ("C", 1)]);

        let metrics = compute_metrics(&events, &[b, c, a], today());
        assert_eq!(metrics.top_categories[0].category_id, "b");
        assert_eq!(metrics.top_categories[1].category_id, "a");
    }

    #[test]
    fn test_top_categories_truncated() {
        let categories: Vec<Category> = (0..7)
            .map(|i| Category::new(format!("c{}", i), format!("Cat {}", i), "#000000"))
            .collect();
        let events: Vec<EventWithJoins> = categories
            .iter()
            .map(|c| event(&format!("e-{}", c.id), "2026-05-05", &c.id))
            .collect();

        let metrics = compute_metrics(&events, &categories, today());
        assert_eq!(metrics.top_categories.len(), 5);
        assert_eq!(metrics.top_categories[0].category_id, "c0");

        let metrics = compute_metrics_with_limit(&events, &categories, today(), 2);
        assert_eq!(metrics.top_categories.len(), 2);
    }

    #[test]
    fn test_dangling_category_counted_as_uncategorized() {
        let categories = vec![Category::new("a", "A", "#111111")];
        let events = vec![event("1", "2026-03-02", "a"), event("2", "2026-03-03", "gone")];

        let metrics = compute_metrics(&events, &categories, today());
        assert_eq!(metrics.total_events, 2);
        assert_eq!(metrics.events_this_month, 2);
        assert_eq!(metrics.uncategorized, 1);
        assert_eq!(metrics.top_categories.len(), 1);
    }

    #[test]
    fn test_malformed_date_still_counted_in_total() {
        let events = vec![event("1", "not-a-date", "a"), event("2", "2026-03-03", "a")];
        let metrics = compute_metrics(&events, &[], today());
        assert_eq!(metrics.total_events, 2);
        assert_eq!(metrics.events_this_month, 1);
        assert_eq!(metrics.issues.len(), 1);
    }
}
