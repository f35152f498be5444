use crate::models::{EventWithJoins, Locale};
use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// An event left out of a date-based view because its date could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateIssue {
    pub event_id: String,
    pub raw: String,
    pub reason: String,
}

impl fmt::Display for DateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {} has unreadable date '{}': {}", self.event_id, self.raw, self.reason)
    }
}

/// Parse a stored event date as a plain calendar date.
///
/// No time zone is involved: "2026-02-01" is February 1 for every observer.
/// A trailing time component ("2026-02-01T18:00:00", "2026-02-01 18:00") is
/// ignored.
pub fn parse_event_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("date is empty".to_string());
    }

    let date_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);

    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| e.to_string())
}

/// Parse a time of day in `HH:MM` or `HH:MM:SS` form.
pub fn parse_event_time(raw: &str) -> Result<NaiveTime, String> {
    let trimmed = raw.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|e| e.to_string())
}

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Day count of a 0-based month.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    match month0 {
        1 if is_leap_year(year) => 29,
        1 => 28,
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Display name of a 0-based month; out-of-range indices wrap.
pub fn month_name(locale: Locale, month0: usize) -> &'static str {
    let names = match locale {
        Locale::En => &MONTHS_EN,
        Locale::Es => &MONTHS_ES,
    };
    names[month0 % 12]
}

pub fn month_names(locale: Locale) -> [&'static str; 12] {
    match locale {
        Locale::En => MONTHS_EN,
        Locale::Es => MONTHS_ES,
    }
}

pub fn same_month(date: NaiveDate, other: NaiveDate) -> bool {
    date.year() == other.year() && date.month() == other.month()
}

/// Resolve the calendar date of every event, splitting out the unreadable ones.
///
/// Dated events keep input order. Issues are returned, not logged; the
/// caller reports them once per page.
pub fn dated_events<'a, I>(events: I) -> (Vec<(NaiveDate, &'a EventWithJoins)>, Vec<DateIssue>)
where
    I: IntoIterator<Item = &'a EventWithJoins>,
{
    let mut dated = Vec::new();
    let mut issues = Vec::new();

    for event in events {
        match event.calendar_date() {
            Ok(date) => dated.push((date, event)),
            Err(issue) => issues.push(issue),
        }
    }

    (dated, issues)
}
