//! Filter Bar Component
//!
//! Mutually exclusive all/active/completed selectors.

use leptos::prelude::*;

use crate::models::Filter;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_board_store();

    view! {
        <div class="filter-bar">
            {Filter::ALL.iter().map(|&filter| {
                let is_selected = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        data-filter=filter.as_str()
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| store.update(|board| board.set_filter(filter))
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
