//! Todo Endpoints
//!
//! CRUD round trips for the task collection. `update_todo` and
//! `delete_todo` fail with a 404 status error when the id is unknown
//! to the server.

use super::{ApiClient, ApiError};
use crate::models::{Todo, TodoFormData, TodoPatch};

impl ApiClient {
    /// GET /todos — the full collection in server-defined order
    pub async fn list_todos(&self) -> Result<Vec<Todo>, ApiError> {
        self.get_json("/todos").await
    }

    /// POST /todos — returns the created todo with its server-assigned id
    pub async fn create_todo(&self, data: &TodoFormData) -> Result<Todo, ApiError> {
        self.post_json("/todos", data).await
    }

    /// PUT /todos/{id} — partial update, returns the updated todo
    pub async fn update_todo(&self, id: i64, patch: &TodoPatch) -> Result<Todo, ApiError> {
        self.put_json(&format!("/todos/{id}"), patch).await
    }

    /// DELETE /todos/{id}
    pub async fn delete_todo(&self, id: i64) -> Result<(), ApiError> {
        self.delete_empty(&format!("/todos/{id}")).await
    }
}
