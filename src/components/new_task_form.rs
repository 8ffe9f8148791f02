//! New Task Form Component
//!
//! Input row for appending tasks to the board.

use leptos::prelude::*;

use crate::config::NEW_TASK_PLACEHOLDER;
use crate::store::{use_board_store, BoardStateStoreFields};

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let store = use_board_store();

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.update(|board| {
            board.submit();
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <div class="new-task-row">
                <input
                    type="text"
                    placeholder=NEW_TASK_PLACEHOLDER
                    prop:value=move || store.input().get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        store.update(|board| board.set_input(value));
                    }
                />
                <button type="submit" class="add-btn">"+"</button>
            </div>
        </form>
    }
}
