//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All mutations go through the `BoardState` methods.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::clock;
use crate::models::{Filter, Task, TaskId};

/// The task currently in edit mode and its uncommitted text
#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    pub id: TaskId,
    pub draft: String,
}

/// Task totals for the summary line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub active: usize,
    pub completed: usize,
}

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Tasks in insertion order
    pub tasks: Vec<Task>,
    /// Active view filter
    pub filter: Filter,
    /// At most one task is edited at a time
    pub editing: Option<EditSession>,
    /// New task input buffer
    pub input: String,
    /// Last id handed out, keeps ids strictly increasing
    pub last_id: Option<TaskId>,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Add the input buffer as a new task
    pub fn submit(&mut self) -> Option<TaskId> {
        let text = self.input.clone();
        self.add(&text)
    }

    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        self.add_at(text, clock::now_millis())
    }

    /// Add a task created at `now_millis`. Whitespace-only text is ignored.
    pub fn add_at(&mut self, text: &str, now_millis: u64) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            log::debug!("[BOARD] ignoring empty task");
            return None;
        }

        let id = TaskId::next(self.last_id, now_millis);
        self.last_id = Some(id);
        self.tasks.push(Task::new(id, text.to_string()));
        self.input.clear();
        log::debug!("[BOARD] added task {}", id);
        Some(id)
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        let removed = self.tasks.len() != before;

        if removed && self.is_editing(id) {
            self.editing = None;
        }
        log::debug!("[BOARD] remove {}: {}", id, if removed { "done" } else { "not found" });
        removed
    }

    /// Start editing a task. Any other edit in progress is dropped.
    pub fn begin_edit(&mut self, id: TaskId) -> bool {
        let Some(text) = self.task(id).map(|task| task.text.clone()) else {
            log::debug!("[BOARD] begin_edit {}: not found", id);
            return false;
        };

        if let Some(prev) = &self.editing {
            if prev.id != id {
                log::debug!("[BOARD] abandoning edit of {}", prev.id);
            }
        }
        self.editing = Some(EditSession {
            id,
            draft: text,
        });
        true
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(session) = self.editing.as_mut() {
            session.draft = text.into();
        }
    }

    /// Save the draft into the task being edited.
    ///
    /// The trimmed draft may be empty; only adding a task rejects empty text.
    pub fn commit_edit(&mut self, id: TaskId) -> bool {
        if !self.is_editing(id) {
            log::debug!("[BOARD] commit_edit {}: not in edit mode", id);
            return false;
        }
        let Some(session) = self.editing.take() else {
            return false;
        };

        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.text = session.draft.trim().to_string();
                log::debug!("[BOARD] saved edit of {}", id);
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.editing.take() {
            log::debug!("[BOARD] cancelled edit of {}", session.id);
        }
    }

    pub fn toggle_complete(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                log::debug!("[BOARD] {} completed={}", id, task.completed);
                true
            }
            None => false,
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|session| session.id == id)
    }

    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|session| session.draft.as_str())
    }

    /// Tasks matching the active filter, in insertion order
    pub fn visible(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> Counts {
        let completed = self.tasks.iter().filter(|task| task.completed).count();
        Counts {
            total: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}
