//! Calendar grouping of tasks by creation day.

use crate::board::domain::Task;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Error returned for a year/month pair that names no calendar month.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid calendar month {year}-{month:02}")]
pub struct InvalidMonth {
    /// Requested year.
    pub year: i32,
    /// Requested month, 1-based.
    pub month: u32,
}

/// One day of a month grid with the tasks created on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    /// The date.
    pub date: NaiveDate,
    /// Tasks whose creation timestamp falls on `date` (UTC).
    pub tasks: Vec<Task>,
}

/// Returns the tasks created on `date` (UTC).
#[must_use]
pub fn tasks_on<'a>(date: NaiveDate, tasks: impl IntoIterator<Item = &'a Task>) -> Vec<Task> {
    tasks
        .into_iter()
        .filter(|task| task.created_at().date_naive() == date)
        .cloned()
        .collect()
}

/// Lays out a month as a Monday-first grid.
///
/// The grid starts with one `None` cell per weekday before the 1st, followed
/// by one cell per day of the month.
///
/// # Errors
///
/// Returns [`InvalidMonth`] when `month` is not in `1..=12` or the year is
/// out of range.
pub fn month_grid<'a>(
    year: i32,
    month: u32,
    tasks: impl IntoIterator<Item = &'a Task>,
) -> Result<Vec<Option<CalendarDay>>, InvalidMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(InvalidMonth { year, month })?;
    let collected: Vec<&Task> = tasks.into_iter().collect();
    let leading = first.weekday().num_days_from_monday();

    let blanks = (0..leading).map(|_| None);
    let days = first
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| {
            Some(CalendarDay {
                date,
                tasks: tasks_on(date, collected.iter().copied()),
            })
        });
    Ok(blanks.chain(days).collect())
}
