//! Todo Collection Store
//!
//! Single source of truth for the task collection, provided via the Leptos
//! Context API. All field changes are write-through: sent to the server,
//! then the whole collection is re-pulled with `refresh`. Nothing here
//! patches the collection in place.

use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::console;

use crate::api::{ApiClient, ApiError};
use crate::models::{Todo, TodoFormData, TodoPatch};

/// Reactive state behind the store handle
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Authoritative client-side copy of the remote collection
    pub todos: Vec<Todo>,
    /// Last CRUD failure, shown by the App as a dismissible banner
    pub last_error: Option<String>,
}

/// Monotonic ticket counter resolving overlapping refreshes: each refresh
/// takes a ticket when it starts, and only the holder of the newest ticket
/// may act on its result.
#[derive(Debug, Default)]
struct Generations(u64);

impl Generations {
    /// Start a refresh, invalidating every earlier ticket
    fn start(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    /// Whether `ticket` still belongs to the newest refresh
    fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// Copy handle over the collection state and the API client.
///
/// The narrow mutation interface (`refresh`, `create`, `update`, `delete`)
/// is the only way task state changes; views read through `todos()`.
#[derive(Clone, Copy)]
pub struct TodoStore {
    state: Store<TodoState>,
    api: StoredValue<ApiClient, LocalStorage>,
    generation: StoredValue<Generations>,
}

/// Get the todo store from context
pub fn use_todo_store() -> TodoStore {
    expect_context::<TodoStore>()
}

impl TodoStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: Store::new(TodoState::default()),
            api: StoredValue::new_local(api),
            generation: StoredValue::new(Generations::default()),
        }
    }

    /// Tracked snapshot of the collection
    pub fn todos(&self) -> Vec<Todo> {
        self.state.todos().get()
    }

    /// Tracked read of the last surfaced CRUD failure
    pub fn last_error(&self) -> Option<String> {
        self.state.last_error().get()
    }

    pub fn clear_error(&self) {
        self.state.last_error().set(None);
    }

    /// Handle to the API client, for the chat relay
    pub fn api(&self) -> ApiClient {
        self.api.with_value(|api| api.clone())
    }

    /// Replace the whole collection from the server.
    ///
    /// Runs at mount, after every successful mutation, and after chat
    /// replies that carry a command. Overlapping refreshes are resolved by
    /// the generation counter: only the newest one may commit its result.
    /// A failed refresh leaves the collection untouched.
    pub async fn refresh(&self) {
        let Some(ticket) = self.generation.try_update_value(Generations::start) else {
            return;
        };

        let result = self.api().list_todos().await;

        // Only the newest refresh may commit or report; a stale one that
        // lost the race is dropped either way, so a late failure cannot
        // raise a banner over fresher state.
        let current = self
            .generation
            .try_with_value(|g| g.is_current(ticket))
            .unwrap_or(false);
        if !current {
            return;
        }

        match result {
            Ok(todos) => self.state.todos().set(todos),
            Err(err) => self.report_failure("load", err),
        }
    }

    /// Create a todo and re-pull the collection; returns whether it succeeded
    pub async fn create(&self, data: TodoFormData) -> bool {
        match self.api().create_todo(&data).await {
            Ok(_) => {
                self.mutation_succeeded().await;
                true
            }
            Err(err) => {
                self.report_failure("create", err);
                false
            }
        }
    }

    /// Apply a partial update and re-pull the collection
    pub async fn update(&self, id: i64, patch: TodoPatch) -> bool {
        match self.api().update_todo(id, &patch).await {
            Ok(_) => {
                self.mutation_succeeded().await;
                true
            }
            Err(err) => {
                self.report_failure("update", err);
                false
            }
        }
    }

    /// Delete a todo and re-pull the collection
    pub async fn delete(&self, id: i64) -> bool {
        match self.api().delete_todo(id).await {
            Ok(()) => {
                self.mutation_succeeded().await;
                true
            }
            Err(err) => {
                self.report_failure("delete", err);
                false
            }
        }
    }

    /// Checkbox path: flip pending/completed with a status-only patch
    pub async fn toggle_status(&self, todo: &Todo) -> bool {
        self.update(todo.id, TodoPatch::status_only(todo.status.toggled())).await
    }

    async fn mutation_succeeded(&self) {
        self.state.last_error().set(None);
        self.refresh().await;
    }

    fn report_failure(&self, action: &str, err: ApiError) {
        console::error_1(&format!("[STORE] Failed to {action} todos: {err}").into());
        self.state
            .last_error()
            .set(Some(format!("Failed to {action} todos: {err}")));
    }
}
