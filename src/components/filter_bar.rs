//! Filter Bar Component
//!
//! Search input and status select above the todo list. Pure view state:
//! the projection itself happens in the App's render closure.

use leptos::prelude::*;

use crate::filter::StatusFilter;

#[component]
pub fn FilterBar(
    search_query: ReadSignal<String>,
    set_search_query: WriteSignal<String>,
    status_filter: ReadSignal<StatusFilter>,
    set_status_filter: WriteSignal<StatusFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                type="text"
                class="search-input"
                placeholder="Search..."
                prop:value=move || search_query.get()
                on:input=move |ev| set_search_query.set(event_target_value(&ev))
            />
            <select
                class="status-select"
                prop:value=move || status_filter.get().as_str()
                on:change=move |ev| {
                    set_status_filter.set(StatusFilter::from_str(&event_target_value(&ev)));
                }
            >
                {StatusFilter::OPTIONS.iter().map(|option| view! {
                    <option value=option.as_str()>{option.label()}</option>
                }).collect_view()}
            </select>
        </div>
    }
}
