use super::common::{dated_events, days_in_month, days_in_year, DateIssue};
use crate::models::{EventWithJoins, WeekStart};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;

/// One cell of the year view.
#[derive(Debug, Clone, Serialize)]
pub struct GridDay<'a> {
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub events: Vec<&'a EventWithJoins>,
}

impl GridDay<'_> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Layout data for one month of the year view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GridMonth {
    /// 0-based month index.
    pub index: usize,
    pub first_weekday: Weekday,
    pub day_count: u32,
    /// Position of the month's first day in `AnnualGrid::days`.
    pub offset: usize,
}

impl GridMonth {
    /// Empty cells before day 1 in a week starting on `week_start`.
    pub fn leading_blanks(&self, week_start: WeekStart) -> usize {
        week_start.column_of(self.first_weekday)
    }
}

pub type Week<'g, 'a> = [Option<&'g GridDay<'a>>; 7];

#[derive(Debug, Clone, Serialize)]
pub struct AnnualGrid<'a> {
    pub year: i32,
    pub days: Vec<GridDay<'a>>,
    pub months: Vec<GridMonth>,
    pub issues: Vec<DateIssue>,
}

impl<'a> AnnualGrid<'a> {
    pub fn month_days(&self, month0: usize) -> &[GridDay<'a>] {
        match self.months.get(month0) {
            Some(month) => &self.days[month.offset..month.offset + month.day_count as usize],
            None => &[],
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&GridDay<'a>> {
        if date.year() != self.year {
            return None;
        }
        self.days.get(date.ordinal0() as usize)
    }

    /// Rows of seven cells covering one month, padded with `None` at both ends.
    pub fn weeks(&self, month0: usize, week_start: WeekStart) -> Vec<Week<'_, 'a>> {
        let Some(month) = self.months.get(month0) else {
            return Vec::new();
        };

        let mut weeks = Vec::new();
        let mut week: Week<'_, 'a> = [None; 7];
        let mut column = month.leading_blanks(week_start);

        for day in self.month_days(month0) {
            week[column] = Some(day);
            column += 1;
            if column == 7 {
                weeks.push(week);
                week = [None; 7];
                column = 0;
            }
        }
        if column > 0 {
            weeks.push(week);
        }

        weeks
    }

    pub fn busy_days(&self) -> usize {
        self.days.iter().filter(|day| day.has_events()).count()
    }
}

/// Lay out every day of `year` with the events occurring on it.
///
/// Events on the same day keep their input order. Events of other years are
/// ignored, events with an unreadable date are reported in `issues`.
pub fn build_annual_grid<'a, I>(events: I, year: i32) -> AnnualGrid<'a>
where
    I: IntoIterator<Item = &'a EventWithJoins>,
{
    let (dated, issues) = dated_events(events);

    let Some(first_day) = NaiveDate::from_ymd_opt(year, 1, 1) else {
        log::warn!("[Calendar] Year {} is outside the supported date range", year);
        return AnnualGrid {
            year,
            days: Vec::new(),
            months: Vec::new(),
            issues,
        };
    };

    let mut days: Vec<GridDay<'a>> = first_day
        .iter_days()
        .take(days_in_year(year) as usize)
        .map(|date| GridDay {
            date,
            weekday: date.weekday(),
            events: Vec::new(),
        })
        .collect();

    let mut months = Vec::with_capacity(12);
    let mut offset = 0usize;
    for index in 0..12 {
        let day_count = days_in_month(year, index as u32);
        months.push(GridMonth {
            index,
            first_weekday: days[offset].weekday,
            day_count,
            offset,
        });
        offset += day_count as usize;
    }

    for (date, event) in dated {
        if date.year() == year {
            days[date.ordinal0() as usize].events.push(event);
        }
    }

    AnnualGrid {
        year,
        days,
        months,
        issues,
    }
}
