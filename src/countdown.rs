//! Countdown computation for notes and birthdays
//!
//! Both functions return a [`Countdown`] outcome instead of failing. The
//! display strings are snapshots: callers store them on the task at add time
//! and never recompute them.

use crate::validation::{MAX_YEAR, parse_birthday, parse_note_datetime};
use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use std::fmt;

/// Reserved display text for an unparseable or non-existent date
pub const INVALID_FORMAT: &str = "Invalid datetime format";

/// Reserved display text for a target that already passed
pub const IN_THE_PAST: &str = "Time is in the past";

const SECONDS_PER_DAY: i64 = 86_400;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// Outcome of a countdown computation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Countdown {
    /// Time remaining, with the age reached for birthdays (0 for notes)
    Remaining { display: String, years: u32 },
    /// The target could not be parsed or does not exist in the target year
    InvalidFormat,
    /// The target lies before the reference time
    InPast,
}

impl Countdown {
    /// Whether this is one of the sentinel outcomes
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Countdown::Remaining { .. })
    }

    /// Display text; sentinels map to their reserved strings
    pub fn display(&self) -> &str {
        match self {
            Countdown::Remaining { display, .. } => display,
            Countdown::InvalidFormat => INVALID_FORMAT,
            Countdown::InPast => IN_THE_PAST,
        }
    }

    /// Split into the `(display, code)` pair; the code is 0 for sentinels
    pub fn into_pair(self) -> (String, u32) {
        match self {
            Countdown::Remaining { display, years } => (display, years),
            Countdown::InvalidFormat => (INVALID_FORMAT.to_string(), 0),
            Countdown::InPast => (IN_THE_PAST.to_string(), 0),
        }
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/// Whether a display string is one of the reserved sentinel texts
pub fn is_sentinel_text(display: &str) -> bool {
    display == INVALID_FORMAT || display == IN_THE_PAST
}

/// Compute the time remaining until a note's due time
///
/// Minutes are rounded up: one second before the target displays
/// `1 minute(s)`, and a full 59 minutes plus change carries into the hour.
///
/// # Arguments
/// * `now` - Reference local time
/// * `target` - Note datetime in `YYYY-M[M]-D[D] HH:MM` format
///
/// # Returns
/// `"<d> day(s), <h> hour(s), <m> minute(s)"` with years 0, or a sentinel
pub fn notes_time_remaining(now: NaiveDateTime, target: &str) -> Countdown {
    let Some(target) = parse_note_datetime(target) else {
        return Countdown::InvalidFormat;
    };

    let delta = target.signed_duration_since(now);
    if delta < TimeDelta::zero() {
        return Countdown::InPast;
    }

    let total = delta.num_seconds();
    let mut days = total / SECONDS_PER_DAY;
    let mut hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let mut minutes = 1 + (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;

    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }
    if hours == 24 {
        hours = 0;
        days += 1;
    }

    Countdown::Remaining {
        display: format!("{days} day(s), {hours} hour(s), {minutes} minute(s)"),
        years: 0,
    }
}

/// Compute the days until the next occurrence of a birthday and the age reached
///
/// A birthday falling on `today` counts as next year's occurrence.
///
/// # Arguments
/// * `today` - Reference local date
/// * `birth` - Date of birth in `YYYY-MM-DD` format
///
/// # Returns
/// `"<days> day(s)"` with the age reached on that occurrence, or a sentinel
pub fn birthdays_time_remaining(today: NaiveDate, birth: &str) -> Countdown {
    let Some(born) = parse_birthday(birth) else {
        return Countdown::InvalidFormat;
    };

    let current_year = today.year();
    // Feb 29 has no occurrence outside leap years
    let Some(mut next) = NaiveDate::from_ymd_opt(current_year, born.month(), born.day()) else {
        return Countdown::InvalidFormat;
    };
    if next <= today {
        if current_year + 1 > MAX_YEAR {
            return Countdown::InvalidFormat;
        }
        match NaiveDate::from_ymd_opt(current_year + 1, born.month(), born.day()) {
            Some(date) => next = date,
            None => return Countdown::InvalidFormat,
        }
    }

    let days = (next - today).num_days();
    let mut years = current_year - born.year();
    if next.year() == current_year + 1 {
        years += 1;
    }

    if days < 0 {
        return Countdown::InPast;
    }

    let Ok(years) = u32::try_from(years) else {
        return Countdown::InvalidFormat;
    };

    Countdown::Remaining {
        display: format!("{days} day(s)"),
        years,
    }
}
