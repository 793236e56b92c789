use super::task::Task;
use std::collections::BTreeSet;

/// In-memory, insertion-ordered collection of tasks
///
/// Duplicates are allowed. Tasks enter through [`TaskStore::add`] and leave
/// only through [`TaskStore::delete_by_indices`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    pub(crate) tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task; the caller is responsible for having validated it
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate over tasks in collection order
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Get a task by collection index
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Collection indices in the order tasks are shown to the user
    ///
    /// Tasks are grouped by kind; within a kind, collection order is kept.
    pub fn display_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.tasks.len()).collect();
        order.sort_by_key(|&i| self.tasks[i].kind());
        order
    }

    /// Delete tasks by their 1-based positions in a display order
    ///
    /// Tokens that are not numbers or fall outside `1..=display_order.len()`
    /// are ignored, and repeated positions delete once. Removal runs from the
    /// highest collection index down so earlier removals never shift later ones.
    ///
    /// # Arguments
    /// * `tokens` - Positions as entered by the user
    /// * `display_order` - Collection indices as shown, e.g. from [`TaskStore::display_order`]
    ///
    /// # Returns
    /// The removed tasks, highest collection index first
    pub fn delete_by_indices<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        display_order: &[usize],
    ) -> Vec<Task> {
        let targets: BTreeSet<usize> = tokens
            .iter()
            .filter_map(|token| token.as_ref().trim().parse::<usize>().ok())
            .filter(|&position| (1..=display_order.len()).contains(&position))
            .map(|position| display_order[position - 1])
            .filter(|&index| index < self.tasks.len())
            .collect();

        targets
            .into_iter()
            .rev()
            .map(|index| self.tasks.remove(index))
            .collect()
    }
}

impl FromIterator<Task> for TaskStore {
    fn from_iter<I: IntoIterator<Item = Task>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a TaskStore {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn note(label: &str) -> Task {
        let now = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Task::note("2025-06-01 10:00", label, now).unwrap()
    }

    fn birthday(label: &str) -> Task {
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        Task::birthday("1990-05-05", label, today).unwrap()
    }

    #[test]
    fn test_add_allows_duplicates() {
        let mut store = TaskStore::new();
        store.add(note("same"));
        store.add(note("same"));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0), store.get(1));
    }

    #[test]
    fn test_display_order_groups_by_kind() {
        let store: TaskStore = vec![note("n1"), birthday("b1"), note("n2"), birthday("b2")]
            .into_iter()
            .collect();
        assert_eq!(store.display_order(), vec![1, 3, 0, 2]);
    }

    #[test]
    fn test_delete_dedupes_and_ignores_garbage() {
        let mut store: TaskStore = ["a", "b", "c", "d", "e"].into_iter().map(note).collect();
        let order = store.display_order();
        let removed = store.delete_by_indices(&["2", "2", "5", "0", "6", "x", "-1"], &order);
        assert_eq!(removed.len(), 2);
        assert_eq!(removed[0].label(), "e");
        assert_eq!(removed[1].label(), "b");
        let labels: Vec<&str> = store.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_delete_maps_through_display_order() {
        let mut store: TaskStore = vec![note("n1"), birthday("b1"), note("n2")]
            .into_iter()
            .collect();
        let order = store.display_order();
        // Position 1 is the birthday, shown first
        let removed = store.delete_by_indices(&["1"], &order);
        assert_eq!(removed[0].label(), "b1");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_with_empty_input() {
        let mut store: TaskStore = vec![note("n1")].into_iter().collect();
        let order = store.display_order();
        let removed = store.delete_by_indices::<&str>(&[], &order);
        assert!(removed.is_empty());
        assert_eq!(store.len(), 1);
    }
}
