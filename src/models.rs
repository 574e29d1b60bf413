//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Task status enum (matches backend string values)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TodoStatus {
    #[default]
    Pending,
    Completed,
}

impl TodoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Pending => "pending",
            TodoStatus::Completed => "completed",
        }
    }

    /// The opposite status, for checkbox toggling
    pub fn toggled(&self) -> TodoStatus {
        match self {
            TodoStatus::Pending => TodoStatus::Completed,
            TodoStatus::Completed => TodoStatus::Pending,
        }
    }

    /// Inverse of `as_str`, for select inputs; unknown values map to Pending
    pub fn from_value(value: &str) -> TodoStatus {
        match value {
            "completed" => TodoStatus::Completed,
            _ => TodoStatus::Pending,
        }
    }
}

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TodoStatus,
    /// ISO datetime from the server; only the date part is meaningful
    pub due_date: Option<String>,
    #[serde(rename = "user_id", default)]
    pub owner: Option<i64>,
}

impl Todo {
    /// Description normalized to "" when absent
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Date part of `due_date` ("YYYY-MM-DD"), with any time component stripped
    pub fn due_date_ymd(&self) -> Option<&str> {
        self.due_date
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d))
            .filter(|d| !d.is_empty())
    }
}

/// Edit-buffer for the todo form; doubles as the create request body
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoFormData {
    pub title: String,
    pub description: String,
    pub status: TodoStatus,
    pub due_date: String,
}

impl TodoFormData {
    /// Seed the buffer from an existing todo (edit mode)
    pub fn from_todo(todo: &Todo) -> Self {
        Self {
            title: todo.title.clone(),
            description: todo.description_text().to_string(),
            status: todo.status,
            due_date: todo.due_date_ymd().unwrap_or("").to_string(),
        }
    }

    pub fn into_patch(self) -> TodoPatch {
        TodoPatch {
            title: Some(self.title),
            description: Some(self.description),
            status: Some(self.status),
            due_date: Some(self.due_date),
        }
    }
}

/// Partial update body for PUT /todos/{id}; `None` fields are omitted
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TodoStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl TodoPatch {
    /// Patch that changes only the status (checkbox toggle path)
    pub fn status_only(status: TodoStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

/// Chat transcript roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the process-local chat transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self { role: Role::Assistant, content: content.into() }
    }
}

/// Response body of POST /chat
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub message: String,
    /// Opaque command the assistant executed server-side; the backend sends
    /// `null` when the message was conversational only
    #[serde(default)]
    pub command: Option<serde_json::Value>,
}

impl ChatReply {
    /// Whether the reply indicates a task mutation happened server-side.
    /// JSON `null` deserializes to `None` and does not count.
    pub fn requests_refresh(&self) -> bool {
        self.command.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_todo_deserializes_with_null_fields() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 1,
            "title": "Buy milk",
            "description": null,
            "status": "pending",
            "due_date": null,
            "user_id": null
        }))
        .unwrap();

        assert_eq!(todo.id, 1);
        assert_eq!(todo.description, None);
        assert_eq!(todo.description_text(), "");
        assert_eq!(todo.due_date_ymd(), None);
        assert_eq!(todo.owner, None);
    }

    #[test]
    fn test_due_date_ymd_strips_time_component() {
        let todo: Todo = serde_json::from_value(json!({
            "id": 2,
            "title": "Report",
            "description": "quarterly",
            "status": "completed",
            "due_date": "2024-03-15T00:00:00",
            "user_id": 7
        }))
        .unwrap();

        assert_eq!(todo.due_date_ymd(), Some("2024-03-15"));
        assert_eq!(todo.status, TodoStatus::Completed);
    }

    #[test]
    fn test_status_roundtrip_and_toggle() {
        assert_eq!(serde_json::to_value(TodoStatus::Pending).unwrap(), json!("pending"));
        assert_eq!(serde_json::to_value(TodoStatus::Completed).unwrap(), json!("completed"));
        assert_eq!(TodoStatus::Pending.toggled(), TodoStatus::Completed);
        assert_eq!(TodoStatus::Completed.toggled(), TodoStatus::Pending);
    }

    #[test]
    fn test_status_from_value_inverts_as_str() {
        for status in [TodoStatus::Pending, TodoStatus::Completed] {
            assert_eq!(TodoStatus::from_value(status.as_str()), status);
        }
        assert_eq!(TodoStatus::from_value("bogus"), TodoStatus::Pending);
    }

    #[test]
    fn test_status_only_patch_omits_other_fields() {
        let patch = TodoPatch::status_only(TodoStatus::Completed);
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({ "status": "completed" }));
    }

    #[test]
    fn test_form_data_into_patch_sends_all_fields() {
        let data = TodoFormData {
            title: "Buy milk".to_string(),
            description: String::new(),
            status: TodoStatus::Pending,
            due_date: "2024-03-15".to_string(),
        };
        let value = serde_json::to_value(data.into_patch()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Buy milk",
                "description": "",
                "status": "pending",
                "due_date": "2024-03-15"
            })
        );
    }

    #[test]
    fn test_chat_reply_null_command_is_not_a_command() {
        let reply: ChatReply =
            serde_json::from_value(json!({ "message": "Hi!", "command": null })).unwrap();
        assert!(!reply.requests_refresh());

        let reply: ChatReply = serde_json::from_value(json!({ "message": "Hi!" })).unwrap();
        assert!(!reply.requests_refresh());

        let reply: ChatReply = serde_json::from_value(json!({
            "message": "Done.",
            "command": { "action": "update", "todo_id": 1 }
        }))
        .unwrap();
        assert!(reply.requests_refresh());
    }
}
