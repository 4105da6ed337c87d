//! UI Components
//!
//! Leptos components making up the todo page.

mod todo_form;
mod filter_tabs;
mod todo_item;
mod edit_todo;
mod error_banner;
mod todo_page;

pub use todo_form::TodoForm;
pub use filter_tabs::FilterTabs;
pub use todo_item::TodoItem;
pub use edit_todo::EditTodo;
pub use error_banner::ErrorBanner;
pub use todo_page::ToDoPage;
