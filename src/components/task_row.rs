//! Task Row Component
//!
//! One task in the list, switching between display and edit mode.

use leptos::prelude::*;

use crate::models::Task;
use crate::store::use_board_store;

/// A single task row
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let store = use_board_store();

    let id = task.id;
    let completed = task.completed;
    let text = task.text;

    let is_editing = move || store.with(|board| board.is_editing(id));
    let draft = move || {
        store
            .with(|board| board.draft().map(str::to_owned))
            .unwrap_or_default()
    };

    let display = move || {
        let text = text.clone();
        view! {
            <div class="task-display">
                // Checkbox
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| store.update(|board| {
                        board.toggle_complete(id);
                    })
                />

                // Text
                <span class="task-text">{text}</span>

                <button class="edit-btn" on:click=move |_| store.update(|board| {
                    board.begin_edit(id);
                })>"✎"</button>

                <button class="delete-btn" on:click=move |_| store.update(|board| {
                    board.remove(id);
                })>"×"</button>
            </div>
        }
    };

    view! {
        <div class=if completed { "task-row completed" } else { "task-row" }>
            <Show when=is_editing fallback=display>
                <div class="task-edit">
                    <input
                        type="text"
                        class="task-edit-input"
                        prop:value=draft
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            store.update(|board| board.set_draft(value));
                        }
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => {
                                    ev.prevent_default();
                                    store.update(|board| {
                                        board.commit_edit(id);
                                    });
                                }
                                "Escape" => store.update(|board| board.cancel_edit()),
                                _ => {}
                            }
                        }
                    />
                    <button class="confirm-btn" on:click=move |_| store.update(|board| {
                        board.commit_edit(id);
                    })>"✓"</button>
                    <button class="cancel-btn" on:click=move |_| store.update(|board| board.cancel_edit())>"✗"</button>
                </div>
            </Show>
        </div>
    }
}
