//! Task Board App
//!
//! Root component: owns the board store and lays out the board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{FilterBar, NewTaskForm, TaskList};
use crate::config::BOARD_TITLE;
use crate::store::BoardState;

#[component]
pub fn TaskBoard() -> impl IntoView {
    // State
    let store = Store::new(BoardState::new());
    provide_context(store);

    let summary = move || {
        let counts = store.with(BoardState::counts);
        format!(
            "{} tasks, {} active, {} completed",
            counts.total, counts.active, counts.completed
        )
    };

    view! {
        <div class="board-layout">
            <main class="board">
                <h1>{BOARD_TITLE}</h1>

                <NewTaskForm />

                <FilterBar />

                <TaskList />

                <p class="task-count">{summary}</p>
            </main>
        </div>
    }
}
