use super::common::{dated_events, DateIssue};
use crate::models::{EventWithJoins, Locale};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// How far away an upcoming event is, in whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelativeDay {
    Today,
    Tomorrow,
    InDays(i64),
}

impl RelativeDay {
    pub fn from_days(days: i64) -> Self {
        match days {
            0 => RelativeDay::Today,
            1 => RelativeDay::Tomorrow,
            n => RelativeDay::InDays(n),
        }
    }

    pub fn between(date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_days((date - today).num_days())
    }

    pub fn label(&self, locale: Locale) -> String {
        match (self, locale) {
            (RelativeDay::Today, Locale::En) => "Today".to_string(),
            (RelativeDay::Tomorrow, Locale::En) => "Tomorrow".to_string(),
            (RelativeDay::InDays(n), Locale::En) => format!("{} days", n),
            (RelativeDay::Today, Locale::Es) => "Hoy".to_string(),
            (RelativeDay::Tomorrow, Locale::Es) => "Mañana".to_string(),
            (RelativeDay::InDays(n), Locale::Es) => format!("{} días", n),
        }
    }
}

impl fmt::Display for RelativeDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label(Locale::En))
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UpcomingEvent<'a> {
    pub event: &'a EventWithJoins,
    pub date: NaiveDate,
    pub days_until: i64,
    pub relative: RelativeDay,
}

#[derive(Debug, Clone, Serialize)]
pub struct Upcoming<'a> {
    pub entries: Vec<UpcomingEvent<'a>>,
    pub issues: Vec<DateIssue>,
}

impl<'a> Upcoming<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &'a EventWithJoins> + '_ {
        self.entries.iter().map(|entry| entry.event)
    }
}

/// The next `limit` events on or after `today`, soonest first.
///
/// `today` is a calendar date, so any time of day is already stripped.
/// Same-date events keep their input order. A `limit` of zero, or no
/// qualifying event, yields an empty list.
pub fn select_upcoming<'a, I>(events: I, limit: usize, today: NaiveDate) -> Upcoming<'a>
where
    I: IntoIterator<Item = &'a EventWithJoins>,
{
    let (mut dated, issues) = dated_events(events);
    dated.retain(|(date, _)| *date >= today);
    dated.sort_by_key(|(date, _)| *date);

    let entries = dated
        .into_iter()
        .take(limit)
        .map(|(date, event)| {
            let days_until = (date - today).num_days();
            UpcomingEvent {
                event,
                date,
                days_until,
                relative: RelativeDay::from_days(days_until),
            }
        })
        .collect();

    Upcoming { entries, issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Event;

    fn event(id: &str, date: &str) -> EventWithJoins {
        EventWithJoins::new(Event::new(id, id, date, "c1"), None, None)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_relative_labels() {
        assert_eq!(RelativeDay::from_days(0).to_string(), "Today");
        assert_eq!(RelativeDay::from_days(1).to_string(), "Tomorrow");
        assert_eq!(RelativeDay::from_days(12).to_string(), "12 days");
        assert_eq!(RelativeDay::from_days(1).label(Locale::Es), "Mañana");
        assert_eq!(RelativeDay::from_days(3).label(Locale::Es), "3 días");
        assert_eq!(RelativeDay::between(day(2026, 3, 1), day(2026, 2, 27)), RelativeDay::InDays(2));
    }

    #[test]
    fn test_today_is_inclusive_and_past_excluded() {
        let events = vec![event("tomorrow", "2026-01-11"), event("past", "2026-01-05"), event("today", "2026-01-10")];
        let upcoming = select_upcoming(&events, 5, day(2026, 1, 10));

        let ids: Vec<&str> = upcoming.events().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["today", "tomorrow"]);
        assert_eq!(upcoming.entries[0].relative, RelativeDay::Today);
        assert_eq!(upcoming.entries[1].relative, RelativeDay::Tomorrow);
    }

    #[test]
    fn test_limit_respected() {
        let events: Vec<EventWithJoins> = (1..=9)
            .map(|d| event(&format!("e{}", d), &format!("2026-06-0{}", d)))
            .collect();
        let upcoming = select_upcoming(&events, 3, day(2026, 6, 1));
        assert_eq!(upcoming.len(), 3);
        assert_eq!(upcoming.entries[2].days_until, 2);

        assert!(select_upcoming(&events, 0, day(2026, 6, 1)).is_empty());
        assert!(select_upcoming(&events, 5, day(2026, 7, 1)).is_empty());
    }

    #[test]
    fn test_same_date_keeps_input_order() {
        let events = vec![event("b", "2026-08-01"), event("a", "2026-08-01"), event("c", "2026-07-30")];
        let upcoming = select_upcoming(&events, 5, day(2026, 7, 1));
        let ids: Vec<&str> = upcoming.events().map(|e| e.id()).collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_malformed_date_reported() {
        let events = vec![event("bad", "tomorrow"), event("ok", "2026-01-12")];
        let upcoming = select_upcoming(&events, 5, day(2026, 1, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming.issues[0].event_id, "bad");
        assert_eq!(upcoming.entries[0].relative.to_string(), "2 days");
    }
}
