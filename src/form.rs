//! Form Dialog State
//!
//! Tagged state machine for the todo form dialog: closed, creating a new
//! todo, or editing an existing one. The edit-buffer itself lives in the
//! form component's signals; this module decides how it is seeded.

use crate::models::{Todo, TodoFormData};

/// Open/closed state of the form dialog
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormMode {
    #[default]
    Closed,
    Create,
    Edit(Todo),
}

impl FormMode {
    pub fn is_open(&self) -> bool {
        !matches!(self, FormMode::Closed)
    }

    /// Dialog title for the current mode
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Edit(_) => "Edit Todo",
            _ => "Add New Todo",
        }
    }

    /// Submit button label for the current mode
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Edit(_) => "Update",
            _ => "Add",
        }
    }

    /// Initial edit-buffer contents: empty defaults for create, the todo's
    /// current fields for edit (due date stripped of any time component)
    pub fn seed(&self) -> TodoFormData {
        match self {
            FormMode::Edit(todo) => TodoFormData::from_todo(todo),
            _ => TodoFormData::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoStatus;

    fn make_todo() -> Todo {
        Todo {
            id: 42,
            title: "Water plants".to_string(),
            description: Some("balcony first".to_string()),
            status: TodoStatus::Pending,
            due_date: Some("2024-06-01T00:00:00".to_string()),
            owner: Some(3),
        }
    }

    #[test]
    fn test_default_mode_is_closed() {
        let mode = FormMode::default();
        assert!(!mode.is_open());
        assert_eq!(mode, FormMode::Closed);
    }

    #[test]
    fn test_create_seeds_empty_defaults() {
        let seed = FormMode::Create.seed();
        assert_eq!(seed, TodoFormData::default());
        assert_eq!(seed.title, "");
        assert_eq!(seed.status, TodoStatus::Pending);
        assert_eq!(seed.due_date, "");
    }

    #[test]
    fn test_edit_seeds_from_todo_and_strips_time() {
        let todo = make_todo();
        let seed = FormMode::Edit(todo.clone()).seed();
        assert_eq!(seed.title, "Water plants");
        assert_eq!(seed.description, "balcony first");
        assert_eq!(seed.status, TodoStatus::Pending);
        assert_eq!(seed.due_date, "2024-06-01");
    }

    #[test]
    fn test_unchanged_edit_submits_the_original_fields() {
        // Seeding from a todo and submitting without touching anything must
        // produce a patch whose fields equal the todo's own.
        let todo = make_todo();
        let patch = FormMode::Edit(todo.clone()).seed().into_patch();
        assert_eq!(patch.title.as_deref(), Some(todo.title.as_str()));
        assert_eq!(patch.description.as_deref(), Some(todo.description_text()));
        assert_eq!(patch.status, Some(todo.status));
        assert_eq!(patch.due_date.as_deref(), todo.due_date_ymd());
    }

    #[test]
    fn test_labels_follow_mode() {
        assert_eq!(FormMode::Create.title(), "Add New Todo");
        assert_eq!(FormMode::Create.submit_label(), "Add");
        let edit = FormMode::Edit(make_todo());
        assert_eq!(edit.title(), "Edit Todo");
        assert_eq!(edit.submit_label(), "Update");
    }
}
