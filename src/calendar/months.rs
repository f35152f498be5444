use super::common::{dated_events, DateIssue};
use crate::models::EventWithJoins;
use chrono::Datelike;
use serde::Serialize;

/// The twelve month buckets of one year, each sorted by date.
#[derive(Debug, Clone, Serialize)]
pub struct MonthBuckets<'a> {
    pub year: i32,
    months: [Vec<&'a EventWithJoins>; 12],
    pub issues: Vec<DateIssue>,
}

impl<'a> MonthBuckets<'a> {
    /// Events of a 0-based month. Every month exists, possibly empty.
    pub fn month(&self, month0: usize) -> &[&'a EventWithJoins] {
        &self.months[month0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &[&'a EventWithJoins])> + '_ {
        self.months
            .iter()
            .enumerate()
            .map(|(index, bucket)| (index, bucket.as_slice()))
    }

    pub fn total(&self) -> usize {
        self.months.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Group the events falling in `year` by calendar month.
///
/// Within a month events are ordered by date; events sharing a date keep
/// their input order. Events of other years are ignored, events with an
/// unreadable date are reported in `issues`.
pub fn bucket_by_month<'a, I>(events: I, year: i32) -> MonthBuckets<'a>
where
    I: IntoIterator<Item = &'a EventWithJoins>,
{
    let (mut dated, issues) = dated_events(events);
    dated.retain(|(date, _)| date.year() == year);
    dated.sort_by_key(|(date, _)| *date);

    let mut months: [Vec<&'a EventWithJoins>; 12] = Default::default();
    for (date, event) in dated {
        months[date.month0() as usize].push(event);
    }

    MonthBuckets { year, months, issues }
}
