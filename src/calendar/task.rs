use crate::countdown::{Countdown, birthdays_time_remaining, notes_time_remaining};
use crate::validation::{
    matches_birthday_shape, matches_note_shape, parse_birthday, parse_note_datetime,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of a task
///
/// Ordering follows the lowercase tag name, so birthdays sort before notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Recurring annual date with a birth year
    Birthday,
    /// One-off date and time
    Note,
}

impl TaskKind {
    /// Lowercase tag used in persisted records
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Birthday => "birthday",
            TaskKind::Note => "note",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "note" => Ok(TaskKind::Note),
            "birthday" => Ok(TaskKind::Birthday),
            _ => Err(format!(
                "Invalid type '{}'. Valid options are: note, birthday",
                s
            )),
        }
    }
}

/// Reason a task could not be created from user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddTaskError {
    /// The input does not have the expected shape
    #[error("Incorrect format")]
    Format,
    /// The shape matched but a calendar value is illegal
    #[error("Incorrect date or time values")]
    Values,
    /// The countdown produced a sentinel outcome
    #[error("{0}")]
    Countdown(Countdown),
}

/// A note bound to a specific date and time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    original_input: String,
    due: NaiveDateTime,
    label: String,
    remaining: String,
}

impl Note {
    /// Create a note, snapshotting the time remaining as of `now`
    ///
    /// # Arguments
    /// * `input` - Datetime string in `YYYY-M[M]-D[D] HH:MM` format
    /// * `label` - Free-text description
    /// * `now` - Reference local time for the countdown
    pub fn new(input: &str, label: &str, now: NaiveDateTime) -> Result<Self, AddTaskError> {
        if !matches_note_shape(input) {
            return Err(AddTaskError::Format);
        }
        let due = parse_note_datetime(input).ok_or(AddTaskError::Values)?;
        match notes_time_remaining(now, input) {
            Countdown::Remaining { display, .. } => Ok(Self {
                original_input: input.to_string(),
                due,
                label: label.to_string(),
                remaining: display,
            }),
            sentinel => Err(AddTaskError::Countdown(sentinel)),
        }
    }

    /// Rebuild a note from a stored snapshot without recomputing the countdown
    pub(crate) fn restore(input: &str, label: &str, remaining: &str) -> Option<Self> {
        let due = parse_note_datetime(input)?;
        Some(Self {
            original_input: input.to_string(),
            due,
            label: label.to_string(),
            remaining: remaining.to_string(),
        })
    }

    /// The due timestamp
    pub fn due(&self) -> NaiveDateTime {
        self.due
    }
}

/// A recurring birthday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    original_input: String,
    born: NaiveDate,
    label: String,
    remaining: String,
    years_reached: u32,
}

impl Birthday {
    /// Create a birthday, snapshotting days remaining and age as of `today`
    ///
    /// # Arguments
    /// * `input` - Date of birth in `YYYY-MM-DD` format
    /// * `label` - Name of the person
    /// * `today` - Reference local date for the countdown
    pub fn new(input: &str, label: &str, today: NaiveDate) -> Result<Self, AddTaskError> {
        if !matches_birthday_shape(input) {
            return Err(AddTaskError::Format);
        }
        let born = parse_birthday(input).ok_or(AddTaskError::Values)?;
        match birthdays_time_remaining(today, input) {
            Countdown::Remaining { display, years } => Ok(Self {
                original_input: input.to_string(),
                born,
                label: label.to_string(),
                remaining: display,
                years_reached: years,
            }),
            sentinel => Err(AddTaskError::Countdown(sentinel)),
        }
    }

    pub(crate) fn restore(input: &str, label: &str, remaining: &str, years: u32) -> Option<Self> {
        let born = parse_birthday(input)?;
        Some(Self {
            original_input: input.to_string(),
            born,
            label: label.to_string(),
            remaining: remaining.to_string(),
            years_reached: years,
        })
    }

    /// The date of birth
    pub fn born(&self) -> NaiveDate {
        self.born
    }

    /// Age reached on the next occurrence, as of creation time
    pub fn years_reached(&self) -> u32 {
        self.years_reached
    }
}

/// A task in the calendar
///
/// Fields are fixed at creation; the remaining-time text is a snapshot and is
/// never recomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Note(Note),
    Birthday(Birthday),
}

impl Task {
    /// Create a note task; see [`Note::new`]
    pub fn note(input: &str, label: &str, now: NaiveDateTime) -> Result<Self, AddTaskError> {
        Note::new(input, label, now).map(Task::Note)
    }

    /// Create a birthday task; see [`Birthday::new`]
    pub fn birthday(input: &str, label: &str, today: NaiveDate) -> Result<Self, AddTaskError> {
        Birthday::new(input, label, today).map(Task::Birthday)
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            Task::Note(_) => TaskKind::Note,
            Task::Birthday(_) => TaskKind::Birthday,
        }
    }

    /// The date string as entered
    pub fn original_input(&self) -> &str {
        match self {
            Task::Note(n) => &n.original_input,
            Task::Birthday(b) => &b.original_input,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Task::Note(n) => &n.label,
            Task::Birthday(b) => &b.label,
        }
    }

    /// Remaining-time text as of creation
    pub fn remaining(&self) -> &str {
        match self {
            Task::Note(n) => &n.remaining,
            Task::Birthday(b) => &b.remaining,
        }
    }

    /// Age reached for birthdays, 0 for notes
    pub fn years_reached(&self) -> u32 {
        match self {
            Task::Note(_) => 0,
            Task::Birthday(b) => b.years_reached,
        }
    }

    /// Calendar date the task is bound to (date of birth for birthdays)
    pub fn date(&self) -> NaiveDate {
        match self {
            Task::Note(n) => n.due.date(),
            Task::Birthday(b) => b.born,
        }
    }
}
