//! Filter/Search Projection
//!
//! Pure helpers for the toolbar's status filter and search box.

use crate::models::{Todo, TodoStatus};

/// Status filter options; `All` is the identity filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl StatusFilter {
    pub const OPTIONS: &'static [StatusFilter] =
        &[StatusFilter::All, StatusFilter::Pending, StatusFilter::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Pending => "pending",
            StatusFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Completed => "Completed",
        }
    }

    /// Select values come back as strings; unknown values fall back to `All`
    pub fn from_str(value: &str) -> StatusFilter {
        match value {
            "pending" => StatusFilter::Pending,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    fn matches(&self, status: TodoStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == TodoStatus::Pending,
            StatusFilter::Completed => status == TodoStatus::Completed,
        }
    }
}

/// Project the collection through the status filter and search query.
///
/// Both predicates apply conjunctively and the original relative order is
/// preserved. The search is a case-insensitive substring match against the
/// title or the description, with an absent description treated as "".
pub fn filter_todos(todos: &[Todo], status: StatusFilter, query: &str) -> Vec<Todo> {
    let needle = query.to_lowercase();
    todos
        .iter()
        .filter(|todo| status.matches(todo.status))
        .filter(|todo| {
            needle.is_empty()
                || todo.title.to_lowercase().contains(&needle)
                || todo.description_text().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_todo(id: i64, title: &str, description: Option<&str>, status: TodoStatus) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: description.map(str::to_string),
            status,
            due_date: None,
            owner: None,
        }
    }

    fn sample() -> Vec<Todo> {
        vec![
            make_todo(1, "Buy milk", None, TodoStatus::Pending),
            make_todo(2, "Write report", Some("quarterly numbers"), TodoStatus::Completed),
            make_todo(3, "Call dentist", Some("reschedule appointment"), TodoStatus::Pending),
        ]
    }

    #[test]
    fn test_all_filter_with_empty_query_is_identity() {
        let todos = sample();
        assert_eq!(filter_todos(&todos, StatusFilter::All, ""), todos);
    }

    #[test]
    fn test_status_filter_preserves_order() {
        let todos = sample();
        let pending = filter_todos(&todos, StatusFilter::Pending, "");
        assert_eq!(pending.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 3]);
        let completed = filter_todos(&todos, StatusFilter::Completed, "");
        assert_eq!(completed.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_search_matches_title_or_description() {
        let todos = sample();
        // "milk" only appears in a title
        let hits = filter_todos(&todos, StatusFilter::All, "milk");
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
        // "quarterly" only appears in a description
        let hits = filter_todos(&todos, StatusFilter::All, "quarterly");
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        // no match anywhere
        assert!(filter_todos(&todos, StatusFilter::All, "bread").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let todos = sample();
        let hits = filter_todos(&todos, StatusFilter::All, "BUY Milk");
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_predicates_apply_conjunctively() {
        let todos = sample();
        // query and status both match only todo 2
        let hits = filter_todos(&todos, StatusFilter::Completed, "report");
        assert_eq!(hits.iter().map(|t| t.id).collect::<Vec<_>>(), vec![2]);
        // status matches but the query does not
        assert!(filter_todos(&todos, StatusFilter::Completed, "milk").is_empty());
    }

    #[test]
    fn test_missing_description_never_panics() {
        let todos = vec![make_todo(9, "No description", None, TodoStatus::Pending)];
        assert!(filter_todos(&todos, StatusFilter::All, "anything").is_empty());
        assert_eq!(filter_todos(&todos, StatusFilter::All, "descr").len(), 1);
    }

    #[test]
    fn test_from_str_falls_back_to_all() {
        assert_eq!(StatusFilter::from_str("pending"), StatusFilter::Pending);
        assert_eq!(StatusFilter::from_str("completed"), StatusFilter::Completed);
        assert_eq!(StatusFilter::from_str("bogus"), StatusFilter::All);
    }
}
