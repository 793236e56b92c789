//! Formatting helper functions for displaying tasks

use crate::calendar::Task;

/// Format a single task as a display line
///
/// # Returns
/// `Note: "<text>" Remains: <remaining>` for notes and
/// `Birthday: "<name> (turns <years>)" - <remaining>` for birthdays
pub fn format_task(task: &Task) -> String {
    match task {
        Task::Note(_) => format!("Note: \"{}\" Remains: {}", task.label(), task.remaining()),
        Task::Birthday(b) => format!(
            "Birthday: \"{} (turns {})\" - {}",
            task.label(),
            b.years_reached(),
            task.remaining()
        ),
    }
}

/// Format tasks one per line
pub fn format_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut result = String::new();
    for task in tasks {
        result.push_str(&format_task(task));
        result.push('\n');
    }
    result
}

/// Format tasks one per line, numbered from 1
pub fn format_numbered<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> String {
    let mut result = String::new();
    for (i, task) in tasks.into_iter().enumerate() {
        result.push_str(&format!("{}. {}\n", i + 1, format_task(task)));
    }
    result
}
