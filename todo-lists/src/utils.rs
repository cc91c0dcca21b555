//! Lookup, mutation and ordering helpers over lists and todos
//!
//! All helpers are linear scans over the in-session collections.

use crate::types::{ListId, Titled, Todo, TodoId, TodoList};
use std::cmp::Ordering;

/// Find a list by exact id
pub fn find_list_by_id<'a>(id: &ListId, lists: &'a [TodoList]) -> Option<&'a TodoList> {
    lists.iter().find(|list| &list.id == id)
}

/// Find a list by exact id for mutation
pub fn find_list_by_id_mut<'a>(
    id: &ListId,
    lists: &'a mut [TodoList],
) -> Option<&'a mut TodoList> {
    lists.iter_mut().find(|list| &list.id == id)
}

/// Find a todo by exact id within one list's todos
pub fn find_todo_by_id<'a>(id: &TodoId, todos: &'a [Todo]) -> Option<&'a Todo> {
    todos.iter().find(|todo| &todo.id == id)
}

/// Find a todo by exact id for mutation
pub fn find_todo_by_id_mut<'a>(id: &TodoId, todos: &'a mut [Todo]) -> Option<&'a mut Todo> {
    todos.iter_mut().find(|todo| &todo.id == id)
}

/// Remove the todo with the given id; no-op if it is not in the list
pub fn delete_todo_by_id(id: &TodoId, list: &mut TodoList) {
    list.todos.retain(|todo| &todo.id != id);
}

/// Remove the list with the given id, together with its todos
pub fn delete_list_by_id(id: &ListId, lists: &mut Vec<TodoList>) {
    lists.retain(|list| &list.id != id);
}

/// Mark every todo in the list as completed
pub fn mark_all_completed(list: &mut TodoList) {
    for todo in &mut list.todos {
        todo.completed = true;
    }
}

/// Number of todos not yet completed
pub fn remaining_count(list: &TodoList) -> usize {
    list.todos.iter().filter(|todo| !todo.completed).count()
}

/// A list is completed when it has at least one todo and none remain
pub fn is_list_completed(list: &TodoList) -> bool {
    !list.todos.is_empty() && remaining_count(list) == 0
}

/// A todo is completed when its flag is set
pub fn is_todo_completed(todo: &Todo) -> bool {
    todo.completed
}

/// Order items for display
///
/// Incomplete items come first, then completed ones; each group is ordered by
/// case-insensitive title. The sort is stable, so items comparing equal keep
/// their relative order and sorting twice yields the same sequence.
pub fn sort_items<T, F>(items: &[T], is_done: F) -> Vec<T>
where
    T: Titled + Clone,
    F: Fn(&T) -> bool,
{
    let mut keyed: Vec<(bool, String, &T)> = items
        .iter()
        .map(|item| (is_done(item), item.title().to_lowercase(), item))
        .collect();

    keyed.sort_by(|a, b| match a.0.cmp(&b.0) {
        Ordering::Equal => a.1.cmp(&b.1),
        other => other,
    });

    keyed.into_iter().map(|(_, _, item)| item.clone()).collect()
}
