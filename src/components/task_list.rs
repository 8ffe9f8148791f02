//! Task List Component
//!
//! Renders the tasks that pass the active filter.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::config::EMPTY_LIST_HINT;
use crate::store::{use_board_store, BoardState};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_board_store();

    let visible = move || store.with(BoardState::visible);
    let is_empty = move || store.with(|board| board.visible().is_empty());

    view! {
        <div class="task-list">
            <For
                each=visible
                // Include mutable fields so edited or toggled rows re-render
                key=|task| (task.id, task.text.clone(), task.completed)
                children=move |task| view! { <TaskRow task=task /> }
            />
            <Show when=is_empty>
                <p class="empty-hint">{EMPTY_LIST_HINT}</p>
            </Show>
        </div>
    }
}
