//! How To Use Component
//!
//! Static help dialog: what to type at the chat assistant and how the
//! manual controls work.

use leptos::prelude::*;

#[component]
pub fn HowToUse(show: ReadSignal<bool>, set_show: WriteSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || show.get()>
            <div class="dialog-backdrop">
                <div class="dialog help-dialog">
                    <h2>"How to Use Smart Todo"</h2>
                    <p>
                        "Smart Todo lets you manage your tasks using natural language \
                         through the chat assistant, or with the regular controls."
                    </p>

                    <h3>"Using the Chat Assistant"</h3>
                    <ul>
                        <li>
                            <strong>"Create tasks"</strong>
                            " — try \"Create a todo for buying groceries tomorrow\"."
                        </li>
                        <li>
                            <strong>"Update tasks"</strong>
                            " — try \"Mark the grocery task as done\" or \
                             \"Change the deadline for the report to next Friday\"."
                        </li>
                        <li>
                            <strong>"Delete tasks"</strong>
                            " — try \"Delete the grocery task\"."
                        </li>
                    </ul>

                    <h3>"Using the Regular Interface"</h3>
                    <ul>
                        <li>"\"Add Todo\" opens a form for a new task."</li>
                        <li>"The checkbox on a card marks a task done or not done."</li>
                        <li>"Edit and Delete live on each card; Delete asks to confirm."</li>
                        <li>"The search box and status filter narrow the list."</li>
                    </ul>

                    <div class="dialog-actions">
                        <button class="submit-btn" on:click=move |_| set_show.set(false)>
                            "Got it"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
