//! Board Configuration
//!
//! Compile-time settings for the board UI.

/// Heading shown above the board
pub const BOARD_TITLE: &str = "Tasks";

/// Placeholder for the new task input
pub const NEW_TASK_PLACEHOLDER: &str = "Add a new task...";

/// Hint shown when the current filter matches nothing
pub const EMPTY_LIST_HINT: &str = "Nothing to show";

/// Console log level: verbose in debug builds
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
