//! Read-only board projection.

use super::task::{Task, TaskStatus};
use std::collections::BTreeMap;

/// Column grouping of the full task set by status.
///
/// Recomputed from scratch on every read and never incrementally patched,
/// so it cannot drift from the source of truth. All four columns are always
/// present; tasks keep their relative insertion order within a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardProjection {
    columns: BTreeMap<TaskStatus, Vec<Task>>,
}

impl BoardProjection {
    /// Groups `tasks` into status columns.
    #[must_use]
    pub fn project(tasks: &[Task]) -> Self {
        let mut columns: BTreeMap<TaskStatus, Vec<Task>> = TaskStatus::ALL
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        for task in tasks {
            if let Some(column) = columns.get_mut(&task.status()) {
                column.push(task.clone());
            }
        }
        Self { columns }
    }

    /// Returns the tasks in the given column, in insertion order.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        self.columns.get(&status).map_or(&[], Vec::as_slice)
    }

    /// Returns the number of tasks in the given column.
    #[must_use]
    pub fn count(&self, status: TaskStatus) -> usize {
        self.columns.get(&status).map_or(0, Vec::len)
    }

    /// Returns the per-column counts in board column order.
    #[must_use]
    pub fn counts(&self) -> BTreeMap<TaskStatus, usize> {
        self.columns
            .iter()
            .map(|(status, tasks)| (*status, tasks.len()))
            .collect()
    }

    /// Returns the total number of projected tasks.
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }
}
