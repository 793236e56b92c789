//! Persisted form of a task
//!
//! One [`TaskRecord`] is written per line. The field names are the on-disk
//! keys: `type`, `datetime`, `text`, `remaining`, `years`.

use super::task::{Birthday, Note, Task, TaskKind};
use crate::countdown::is_sentinel_text;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat mapping of a task as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(rename = "type")]
    pub kind: TaskKind,
    /// Original date string as entered
    pub datetime: String,
    /// Label (note text or birthday name)
    pub text: String,
    /// Remaining-time snapshot
    pub remaining: String,
    /// Age reached, 0 for notes
    #[serde(default)]
    pub years: u32,
}

/// Reason a stored record could not become a task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid {kind} date '{datetime}'")]
    InvalidDate { kind: TaskKind, datetime: String },
    #[error("remaining time holds the reserved text '{0}'")]
    SentinelRemaining(String),
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            kind: task.kind(),
            datetime: task.original_input().to_string(),
            text: task.label().to_string(),
            remaining: task.remaining().to_string(),
            years: task.years_reached(),
        }
    }
}

impl TryFrom<TaskRecord> for Task {
    type Error = RecordError;

    /// Rebuild a task, re-validating the date but keeping the stored snapshot
    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        if is_sentinel_text(&record.remaining) {
            return Err(RecordError::SentinelRemaining(record.remaining));
        }
        let restored = match record.kind {
            TaskKind::Note => {
                Note::restore(&record.datetime, &record.text, &record.remaining).map(Task::Note)
            }
            TaskKind::Birthday => Birthday::restore(
                &record.datetime,
                &record.text,
                &record.remaining,
                record.years,
            )
            .map(Task::Birthday),
        };
        restored.ok_or(RecordError::InvalidDate {
            kind: record.kind,
            datetime: record.datetime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keys() {
        let record = TaskRecord {
            kind: TaskKind::Birthday,
            datetime: "1990-03-10".to_string(),
            text: "Alice".to_string(),
            remaining: "365 day(s)".to_string(),
            years: 35,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"type":"birthday","datetime":"1990-03-10","text":"Alice","remaining":"365 day(s)","years":35}"#
        );
    }

    #[test]
    fn test_restore_keeps_snapshot() {
        let record = TaskRecord {
            kind: TaskKind::Note,
            datetime: "2020-01-01 10:00".to_string(),
            text: "Old".to_string(),
            remaining: "3 day(s), 1 hour(s), 5 minute(s)".to_string(),
            years: 0,
        };
        let task = Task::try_from(record).unwrap();
        assert_eq!(task.remaining(), "3 day(s), 1 hour(s), 5 minute(s)");
        assert_eq!(task.label(), "Old");
    }

    #[test]
    fn test_restore_rejects_invalid_date() {
        let record = TaskRecord {
            kind: TaskKind::Birthday,
            datetime: "1990-02-30".to_string(),
            text: "Bad".to_string(),
            remaining: "1 day(s)".to_string(),
            years: 1,
        };
        let err = Task::try_from(record).unwrap_err();
        assert_eq!(err.to_string(), "invalid birthday date '1990-02-30'");
    }

    #[test]
    fn test_restore_rejects_sentinel_snapshot() {
        let record = TaskRecord {
            kind: TaskKind::Note,
            datetime: "2020-01-01 10:00".to_string(),
            text: "Stale".to_string(),
            remaining: "Time is in the past".to_string(),
            years: 0,
        };
        assert_eq!(
            Task::try_from(record),
            Err(RecordError::SentinelRemaining("Time is in the past".to_string()))
        );
    }

    #[test]
    fn test_restore_rejects_kind_mismatch() {
        let record: TaskRecord = serde_json::from_str(
            r#"{"type":"note","datetime":"1990-03-10","text":"x","remaining":"1 day(s)","years":0}"#,
        )
        .unwrap();
        assert!(Task::try_from(record).is_err());
    }
}
