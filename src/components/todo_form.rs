//! Todo Form Component
//!
//! Modal dialog for creating and editing todos. The edit-buffer lives in
//! local signals, reseeded whenever the dialog opens, and is only handed
//! to the store on submit. Cancel discards it without side effects.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::form::FormMode;
use crate::models::{TodoFormData, TodoStatus};
use crate::store::use_todo_store;

#[component]
pub fn TodoForm(
    form_mode: ReadSignal<FormMode>,
    set_form_mode: WriteSignal<FormMode>,
) -> impl IntoView {
    let store = use_todo_store();

    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TodoStatus::Pending);
    let (due_date, set_due_date) = signal(String::new());

    // Reseed the edit-buffer whenever the dialog opens
    Effect::new(move |_| {
        let mode = form_mode.get();
        if mode.is_open() {
            let seed = mode.seed();
            set_title.set(seed.title);
            set_description.set(seed.description);
            set_status.set(seed.status);
            set_due_date.set(seed.due_date);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let data = TodoFormData {
            title: title.get(),
            description: description.get(),
            status: status.get(),
            due_date: due_date.get(),
        };
        if data.title.trim().is_empty() {
            return;
        }
        let mode = form_mode.get();
        spawn_local(async move {
            let ok = match mode {
                FormMode::Edit(todo) => store.update(todo.id, data.into_patch()).await,
                _ => store.create(data).await,
            };
            // Stay open on failure so the user can retry the same buffer
            if ok {
                set_form_mode.set(FormMode::Closed);
            }
        });
    };

    view! {
        <Show when=move || form_mode.get().is_open()>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <form on:submit=submit>
                        <h2>{move || form_mode.get().title()}</h2>
                        <label class="form-field">
                            "Title"
                            <input
                                type="text"
                                required
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            "Description"
                            <textarea
                                rows="3"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="form-field">
                            "Status"
                            <select
                                prop:value=move || status.get().as_str()
                                on:change=move |ev| {
                                    set_status.set(TodoStatus::from_value(&event_target_value(&ev)));
                                }
                            >
                                <option value="pending">"Pending"</option>
                                <option value="completed">"Completed"</option>
                            </select>
                        </label>
                        <label class="form-field">
                            "Due Date"
                            <input
                                type="date"
                                prop:value=move || due_date.get()
                                on:input=move |ev| set_due_date.set(event_target_value(&ev))
                            />
                        </label>
                        <div class="dialog-actions">
                            <button
                                type="button"
                                class="cancel-btn"
                                on:click=move |_| set_form_mode.set(FormMode::Closed)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="submit-btn">
                                {move || form_mode.get().submit_label()}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
