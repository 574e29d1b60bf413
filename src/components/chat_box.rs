//! Chat Box Component
//!
//! Floating panel that relays free-text messages to the backend assistant.
//! The transcript is process-local and optimistic for chat messages only;
//! task data is never touched directly. When a reply carries a command the
//! store is asked for exactly one refresh. Transport failures become a
//! fixed assistant message instead of an error state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::console;

use crate::models::{ChatMessage, Role};
use crate::store::use_todo_store;

/// Shown in place of a reply when the chat round trip fails
const CHAT_ERROR_REPLY: &str = "Sorry, I encountered an error processing your request.";

#[component]
pub fn ChatBox() -> impl IntoView {
    let store = use_todo_store();

    let (messages, set_messages) = signal(Vec::<ChatMessage>::new());
    let (input, set_input) = signal(String::new());
    let (is_sending, set_is_sending) = signal(false);

    // One outstanding request at a time; the input is disabled while waiting
    let send = move || {
        let text = input.get().trim().to_string();
        if text.is_empty() || is_sending.get() {
            return;
        }
        set_input.set(String::new());
        set_is_sending.set(true);
        set_messages.update(|m| m.push(ChatMessage::user(text.clone())));

        spawn_local(async move {
            match store.api().chat(&text).await {
                Ok(reply) => {
                    set_messages.update(|m| m.push(ChatMessage::assistant(reply.message.clone())));
                    if reply.requests_refresh() {
                        store.refresh().await;
                    }
                }
                Err(err) => {
                    console::error_1(&format!("[CHAT] Failed to send message: {err}").into());
                    set_messages.update(|m| m.push(ChatMessage::assistant(CHAT_ERROR_REPLY)));
                }
            }
            set_is_sending.set(false);
        });
    };

    view! {
        <div class="chat-box">
            <div class="chat-header">"Chat Assistant"</div>
            <div class="chat-messages">
                {move || messages.get().into_iter().map(|message| {
                    let class = match message.role {
                        Role::User => "chat-message user",
                        Role::Assistant => "chat-message assistant",
                    };
                    view! {
                        <div class=class>
                            <p>{message.content}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="chat-input-row">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    prop:disabled=move || is_sending.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    class="send-btn"
                    prop:disabled=move || is_sending.get()
                    on:click=move |_| send()
                >
                    {move || if is_sending.get() { "..." } else { "Send" }}
                </button>
            </div>
        </div>
    }
}
