//! Smart Todo App
//!
//! Top-level component: creates the store, owns filter/form/help state,
//! and wires the components together.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{ChatBox, FilterBar, HowToUse, TodoForm, TodoItem};
use crate::filter::{filter_todos, StatusFilter};
use crate::form::FormMode;
use crate::store::TodoStore;

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::new(ApiClient::from_env());
    provide_context(store);

    let (status_filter, set_status_filter) = signal(StatusFilter::default());
    let (search_query, set_search_query) = signal(String::new());
    let (form_mode, set_form_mode) = signal(FormMode::Closed);
    let (show_help, set_show_help) = signal(false);

    // Initial load
    Effect::new(move |_| {
        spawn_local(async move {
            store.refresh().await;
        });
    });

    // Recomputed on every dependency change; no caching needed at this scale
    let filtered = move || filter_todos(&store.todos(), status_filter.get(), &search_query.get());

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Todo List"</h1>
                <div class="header-actions">
                    <button class="help-btn" on:click=move |_| set_show_help.set(true)>
                        "How to use"
                    </button>
                    <button class="add-btn" on:click=move |_| set_form_mode.set(FormMode::Create)>
                        "Add Todo"
                    </button>
                </div>
            </header>

            {move || store.last_error().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button on:click=move |_| store.clear_error()>"Dismiss"</button>
                </div>
            })}

            <FilterBar
                search_query=search_query
                set_search_query=set_search_query
                status_filter=status_filter
                set_status_filter=set_status_filter
            />

            <div class="todo-list">
                {move || filtered().into_iter().map(|todo| view! {
                    <TodoItem
                        todo=todo
                        on_edit=move |todo| set_form_mode.set(FormMode::Edit(todo))
                    />
                }).collect_view()}
            </div>

            <p class="item-count">
                {move || format!("{} of {} todos", filtered().len(), store.todos().len())}
            </p>

            <TodoForm form_mode=form_mode set_form_mode=set_form_mode />
            <ChatBox />
            <HowToUse show=show_help set_show=set_show_help />
        </div>
    }
}
