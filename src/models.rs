//! Board Models
//!
//! Task records and the view filter.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque task identifier, ordered by creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Derive the next id from a creation timestamp.
    ///
    /// Uses the timestamp unless it would not be strictly greater than the
    /// previous id (same millisecond or clock skew).
    pub fn next(last: Option<TaskId>, now_millis: u64) -> Self {
        match last {
            Some(TaskId(prev)) if now_millis <= prev => TaskId(prev + 1),
            _ => TaskId(now_millis),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }
}

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Filters in display order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(id: u64, completed: bool) -> Task {
        Task {
            id: TaskId(id),
            text: format!("Task {}", id),
            completed,
        }
    }

    #[test]
    fn test_next_id_uses_timestamp() {
        assert_eq!(TaskId::next(None, 1_000), TaskId(1_000));
        assert_eq!(TaskId::next(Some(TaskId(1_000)), 1_500), TaskId(1_500));
    }

    #[test]
    fn test_next_id_same_millisecond() {
        let first = TaskId::next(None, 1_000);
        let second = TaskId::next(Some(first), 1_000);
        let third = TaskId::next(Some(second), 999); // clock went backwards
        assert!(first < second && second < third);
        assert_eq!(third, TaskId(1_002));
    }

    #[test]
    fn test_filter_predicates() {
        let open = make_task(1, false);
        let done = make_task(2, true);

        assert!(Filter::All.matches(&open));
        assert!(Filter::All.matches(&done));
        assert!(Filter::Active.matches(&open));
        assert!(!Filter::Active.matches(&done));
        assert!(!Filter::Completed.matches(&open));
        assert!(Filter::Completed.matches(&done));
    }

    #[test]
    fn test_filter_default_and_order() {
        assert_eq!(Filter::default(), Filter::All);
        let names: Vec<_> = Filter::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names, ["all", "active", "completed"]);
    }

    #[test]
    fn test_filter_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Filter::Completed).unwrap(), "\"completed\"");
        let parsed: Filter = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(parsed, Filter::Active);
    }

    #[test]
    fn test_new_task_is_open() {
        let task = Task::new(TaskId(7), "Buy milk".to_string());
        assert!(!task.completed);
        assert_eq!(task.id.to_string(), "#7");
    }
}
