//! UI Components
//!
//! Reusable Leptos components, one per file.

mod chat_box;
mod delete_confirm_button;
mod filter_bar;
mod how_to_use;
mod todo_form;
mod todo_item;

pub use chat_box::ChatBox;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use how_to_use::HowToUse;
pub use todo_form::TodoForm;
pub use todo_item::TodoItem;
