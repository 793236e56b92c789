//! Filtering and sorting over a TaskStore
//!
//! Filters return views and never touch the collection; sorts reorder the
//! collection in place and are stable.

use super::task::{Task, TaskKind};
use super::task_store::TaskStore;
use crate::clock::local_date_today;
use chrono::{Datelike, NaiveDate};
use std::cmp::Ordering;

/// Criterion for [`TaskStore::filter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    /// Every task
    All,
    /// Tasks of one kind
    Kind(TaskKind),
    /// Case-insensitive substring of the label
    Text(String),
    /// Same month and day as the given date
    ///
    /// When the date's year is before the current year, only birthdays match.
    /// This asymmetry is inherited behaviour of the calendar and kept as is.
    Date(NaiveDate),
}

impl TaskFilter {
    fn matches(&self, task: &Task, current_year: i32) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Kind(kind) => task.kind() == *kind,
            TaskFilter::Text(text) => task
                .label()
                .to_lowercase()
                .contains(&text.to_lowercase()),
            TaskFilter::Date(date) => {
                let same_day =
                    task.date().month() == date.month() && task.date().day() == date.day();
                if date.year() >= current_year {
                    same_day
                } else {
                    task.kind() == TaskKind::Birthday && same_day
                }
            }
        }
    }
}

/// Total minutes encoded in a remaining-time display string
///
/// Integer tokens are read positionally: days, hours, minutes for notes and
/// days alone for birthdays. Missing tokens count as zero. Oversized values
/// saturate at `u64::MAX` instead of overflowing.
pub fn remaining_minutes(kind: TaskKind, display: &str) -> u64 {
    // Tokens are all ASCII digits, so parsing only fails on overflow
    let numbers: Vec<u64> = display
        .split(|c: char| !c.is_ascii_digit())
        .filter(|token| !token.is_empty())
        .map(|token| token.parse().unwrap_or(u64::MAX))
        .collect();
    let at = |i: usize| numbers.get(i).copied().unwrap_or(0);

    match kind {
        TaskKind::Note => at(0)
            .saturating_mul(1440)
            .saturating_add(at(1).saturating_mul(60))
            .saturating_add(at(2)),
        TaskKind::Birthday => at(0).saturating_mul(1440),
    }
}

fn compare_remaining(a: &Task, b: &Task) -> Ordering {
    remaining_minutes(a.kind(), a.remaining())
        .cmp(&remaining_minutes(b.kind(), b.remaining()))
        .then_with(|| a.label().to_lowercase().cmp(&b.label().to_lowercase()))
}

impl TaskStore {
    /// Tasks matching the criterion, in collection order
    pub fn filter(&self, criterion: &TaskFilter) -> Vec<&Task> {
        self.filter_as_of(criterion, local_date_today())
    }

    /// Same as [`TaskStore::filter`] with an explicit current date
    pub fn filter_as_of(&self, criterion: &TaskFilter, today: NaiveDate) -> Vec<&Task> {
        let current_year = today.year();
        self.tasks
            .iter()
            .filter(|task| criterion.matches(task, current_year))
            .collect()
    }

    /// Group tasks by kind, keeping insertion order within a kind
    pub fn sort_by_type(&mut self) {
        self.tasks.sort_by_key(|task| task.kind());
    }

    /// Order tasks by time remaining, then by label ignoring case
    ///
    /// Descending order reverses the comparison, so tasks that compare equal
    /// still keep their insertion order.
    pub fn sort_by_remaining(&mut self, ascending: bool) {
        if ascending {
            self.tasks.sort_by(compare_remaining);
        } else {
            self.tasks.sort_by(|a, b| compare_remaining(b, a));
        }
    }
}

/// Sort a view by kind, keeping its order within a kind
pub fn sorted_by_type(mut tasks: Vec<&Task>) -> Vec<&Task> {
    tasks.sort_by_key(|task| task.kind());
    tasks
}
