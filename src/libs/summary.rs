use crate::libs::filter::{visible_tasks, ViewSelector};
use crate::libs::task::{known_categories, Task, DEFAULT_CATEGORY};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// Done versus pending over real tasks; list markers are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub done: usize,
    pub pending: usize,
}

impl Progress {
    pub fn of(tasks: &[Task]) -> Self {
        tasks.iter().filter(|t| !t.is_phantom()).fold(Progress::default(), |mut acc, t| {
            if t.done {
                acc.done += 1;
            } else {
                acc.pending += 1;
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.done + self.pending
    }

    /// Share of done tasks, `0.0` when there are none.
    pub fn percent_done(&self) -> f64 {
        if self.total() == 0 {
            0.0
        } else {
            self.done as f64 * 100.0 / self.total() as f64
        }
    }
}

/// Pending tasks per list. Every known list appears, empty ones with `0`;
/// the default category appears only when it holds pending tasks.
pub fn pending_by_category(tasks: &[Task]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = known_categories(tasks).into_iter().map(|name| (name, 0)).collect();
    for task in tasks.iter().filter(|t| !t.done) {
        *counts.entry(task.category.clone()).or_insert(0) += 1;
    }
    counts.retain(|name, count| name != DEFAULT_CATEGORY || *count > 0);
    counts
}

/// Size of each built-in view at `now`.
pub fn view_counts(tasks: &[Task], now: NaiveDateTime) -> Vec<(ViewSelector, usize)> {
    [
        ViewSelector::All,
        ViewSelector::Today,
        ViewSelector::Scheduled,
        ViewSelector::Flagged,
        ViewSelector::Overdue,
    ]
    .into_iter()
    .map(|selector| {
        let count = visible_tasks(tasks, &selector, now).len();
        (selector, count)
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::task::{Priority, Task};

    fn task(id: i64, category: &str, done: bool) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            category: category.to_string(),
            due_date: None,
            notes: None,
            flagged: false,
            done,
            priority: Priority::default(),
        }
    }

    #[test]
    fn progress_ignores_markers() {
        let tasks = vec![task(1, "Work", true), task(2, "Work", false), Task::phantom(3, "Home")];
        let progress = Progress::of(&tasks);
        assert_eq!(progress, Progress { done: 1, pending: 1 });
        assert_eq!(progress.percent_done(), 50.0);
    }

    #[test]
    fn empty_progress_is_zero_percent() {
        assert_eq!(Progress::of(&[]).percent_done(), 0.0);
    }

    #[test]
    fn pending_counts_include_empty_lists() {
        let tasks = vec![
            task(1, "Work", false),
            task(2, "Work", true),
            Task::phantom(3, "Home"),
            task(4, DEFAULT_CATEGORY, true),
        ];
        let counts = pending_by_category(&tasks);
        assert_eq!(counts.get("Work"), Some(&1));
        assert_eq!(counts.get("Home"), Some(&0));
        assert_eq!(counts.get(DEFAULT_CATEGORY), None);
    }
}
