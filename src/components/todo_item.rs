//! Todo Item Component
//!
//! A single task card: status checkbox, title and description, due-date
//! chip, edit and delete actions. Delete and status toggle go through the
//! store; edit is delegated upward so the App can open the form dialog.

use chrono::{Local, NaiveDate};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{Todo, TodoStatus};
use crate::store::use_todo_store;

use super::DeleteConfirmButton;

/// Format "2024-03-15" as "Due: Mar 15, 2024"; overdue when before today
fn due_date_chip(ymd: &str) -> (String, bool) {
    match NaiveDate::parse_from_str(ymd, "%Y-%m-%d") {
        Ok(date) => {
            let overdue = date < Local::now().date_naive();
            (format!("Due: {}", date.format("%b %-d, %Y")), overdue)
        }
        // Unparseable dates are shown as-is rather than dropped
        Err(_) => (format!("Due: {ymd}"), false),
    }
}

#[component]
pub fn TodoItem(todo: Todo, #[prop(into)] on_edit: Callback<Todo>) -> impl IntoView {
    let store = use_todo_store();
    let completed = todo.status == TodoStatus::Completed;
    let chip = todo.due_date_ymd().map(due_date_chip);
    let description = todo.description_text().to_string();
    let todo_id = todo.id;
    let toggle_todo = todo.clone();
    let edit_todo = todo.clone();

    view! {
        <div class=if completed { "todo-card completed" } else { "todo-card" }>
            <input
                type="checkbox"
                class="status-checkbox"
                prop:checked=completed
                on:change=move |_| {
                    let todo = toggle_todo.clone();
                    spawn_local(async move {
                        store.toggle_status(&todo).await;
                    });
                }
            />
            <div class="todo-body">
                <h3 class=if completed { "todo-title done" } else { "todo-title" }>
                    {todo.title.clone()}
                </h3>
                <p class="todo-description">{description}</p>
                {chip.map(|(label, overdue)| view! {
                    <span class=if overdue { "due-chip overdue" } else { "due-chip" }>
                        {label}
                    </span>
                })}
            </div>
            <div class="todo-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(edit_todo.clone())>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_| {
                        spawn_local(async move {
                            store.delete(todo_id).await;
                        });
                    }
                />
            </div>
        </div>
    }
}
