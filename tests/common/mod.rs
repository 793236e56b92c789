//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use smart_calendar::{FixedClock, Session, Storage, Task, TaskStore};
use tempfile::NamedTempFile;

/// Reference instant used across tests: 2025-01-01 12:00
pub fn test_now() -> NaiveDateTime {
    test_today().and_hms_opt(12, 0, 0).unwrap()
}

pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

/// Create a note relative to [`test_now`]
pub fn note(datetime: &str, text: &str) -> Task {
    Task::note(datetime, text, test_now()).unwrap()
}

/// Create a birthday relative to [`test_today`]
pub fn birthday(date: &str, name: &str) -> Task {
    Task::birthday(date, name, test_today()).unwrap()
}

/// Create a session with a frozen clock and temporary storage
pub fn get_test_session(store: TaskStore) -> (Session<FixedClock>, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let storage = Storage::new(temp_file.path());
    let session = Session::new(store, Some(storage), FixedClock(test_now()));
    (session, temp_file)
}

/// Feed a script of input lines to a session and return everything it printed
pub fn run_script(session: &mut Session<FixedClock>, lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    let mut output = Vec::new();
    session.run(input.as_bytes(), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

pub fn labels(store: &TaskStore) -> Vec<String> {
    store.iter().map(|t| t.label().to_string()).collect()
}
