use crate::calendar::{Task, TaskRecord, TaskStore};
use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Line-delimited JSON storage for the task collection
///
/// Each line holds one [`TaskRecord`]. Saving rewrites the whole file.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load all readable records
    ///
    /// A missing file yields an empty store. Lines that fail to parse or hold
    /// an invalid date are skipped with a warning.
    pub fn load(&self) -> Result<TaskStore> {
        if !self.file_path.exists() {
            debug!("{} does not exist, starting empty", self.file_path.display());
            return Ok(TaskStore::new());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;

        let mut store = TaskStore::new();
        for (number, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match parse_line(line) {
                Ok(task) => store.add(task),
                Err(e) => warn!(
                    "Skipping line {} of {}: {:#}",
                    number + 1,
                    self.file_path.display(),
                    e
                ),
            }
        }

        debug!(
            "Loaded {} task(s) from {}",
            store.len(),
            self.file_path.display()
        );
        Ok(store)
    }

    /// Overwrite the file with the whole collection
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        let mut content = String::new();
        for task in store {
            content.push_str(&serde_json::to_string(&TaskRecord::from(task))?);
            content.push('\n');
        }
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(
            "Saved {} task(s) to {}",
            store.len(),
            self.file_path.display()
        );
        Ok(())
    }
}

fn parse_line(line: &str) -> Result<Task> {
    let record: TaskRecord = serde_json::from_str(line)?;
    Ok(Task::try_from(record)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("missing.jsonl"));
        assert!(storage.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_bad_lines() {
        let file = NamedTempFile::new().unwrap();
        let content = [
            r#"{"type":"note","datetime":"2025-01-02 10:00","text":"Ok","remaining":"1 day(s), 0 hour(s), 1 minute(s)","years":0}"#,
            "not json at all",
            "",
            r#"{"type":"birthday","datetime":"1990-02-30","text":"Bad date","remaining":"1 day(s)","years":3}"#,
            r#"{"type":"meeting","datetime":"2025-01-02 10:00","text":"Unknown","remaining":"x","years":0}"#,
            r#"{"type":"birthday","datetime":"1990-03-10","text":"Alice","remaining":"10 day(s)","years":35}"#,
        ]
        .join("\n");
        fs::write(file.path(), content).unwrap();

        let store = Storage::new(file.path()).load().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().label(), "Ok");
        assert_eq!(store.get(1).unwrap().years_reached(), 35);
    }

    #[test]
    fn test_save_writes_one_record_per_line() {
        let file = NamedTempFile::new().unwrap();
        let storage = Storage::new(file.path());

        let record = TaskRecord {
            kind: crate::calendar::TaskKind::Birthday,
            datetime: "1990-03-10".to_string(),
            text: "Alice".to_string(),
            remaining: "10 day(s)".to_string(),
            years: 35,
        };
        let store: TaskStore = vec![
            Task::try_from(record.clone()).unwrap(),
            Task::try_from(record).unwrap(),
        ]
        .into_iter()
        .collect();
        storage.save(&store).unwrap();

        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert_eq!(storage.load().unwrap(), store);
    }
}
