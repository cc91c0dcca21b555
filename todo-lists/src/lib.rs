//! Todo list domain for session-scoped list management
//!
//! This crate holds the data model and the pure helpers the web layer builds
//! on. It performs no I/O: callers load a session's lists, hand them to these
//! helpers, and store the result.
//!
//! ## Basic Usage
//!
//! ```rust
//! use todo_lists::{
//!     is_list_completed, is_todo_completed, remaining_count, sort_items,
//!     validate_list_title, TodoList,
//! };
//!
//! let mut lists: Vec<TodoList> = Vec::new();
//! assert!(validate_list_title("Groceries", &lists).is_none());
//! lists.push(TodoList::new("Groceries"));
//! assert!(validate_list_title("Groceries", &lists).is_some());
//!
//! let groceries = &mut lists[0];
//! groceries.add_todo("Milk");
//! groceries.todos[0].completed = true;
//! assert_eq!(remaining_count(groceries), 0);
//! assert!(is_list_completed(groceries));
//!
//! let display_order = sort_items(&groceries.todos, is_todo_completed);
//! assert_eq!(display_order.len(), 1);
//! ```

mod error;
mod types;
mod utils;
mod validation;

// Re-exports
pub use error::{ValidationError, MAX_TITLE_LENGTH};
pub use types::{ListId, Titled, Todo, TodoId, TodoList};
pub use utils::{
    delete_list_by_id, delete_todo_by_id, find_list_by_id, find_list_by_id_mut, find_todo_by_id,
    find_todo_by_id_mut, is_list_completed, is_todo_completed, mark_all_completed,
    remaining_count, sort_items,
};
pub use validation::{validate_list_title, validate_todo_title};
