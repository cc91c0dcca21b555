//! Lifecycle tests over the pure helpers: create, fill, complete, reorder

use todo_lists::{
    delete_todo_by_id, find_list_by_id_mut, find_todo_by_id_mut, is_list_completed,
    is_todo_completed, remaining_count, sort_items, validate_list_title, validate_todo_title,
    TodoId, TodoList, ValidationError,
};

#[test]
fn test_groceries_scenario() {
    let mut lists: Vec<TodoList> = Vec::new();

    assert_eq!(validate_list_title("Groceries", &lists), None);
    lists.push(TodoList::new("Groceries"));
    let list_id = lists[0].id.clone();

    let list = find_list_by_id_mut(&list_id, &mut lists).expect("list exists");
    assert_eq!(validate_todo_title("Milk"), None);
    let todo_id = list.add_todo("Milk").id.clone();
    assert_eq!(remaining_count(list), 1);
    assert!(!is_list_completed(list));

    let todo = find_todo_by_id_mut(&todo_id, &mut list.todos).expect("todo exists");
    todo.completed = !todo.completed;

    assert_eq!(remaining_count(list), 0);
    assert!(is_list_completed(list));
}

#[test]
fn test_unique_titles_each_create_exactly_one_list() {
    let mut lists: Vec<TodoList> = Vec::new();
    let titles: Vec<String> = (1..=100).map(|n| "t".repeat(n)).collect();

    for title in &titles {
        assert_eq!(validate_list_title(title, &lists), None);
        lists.push(TodoList::new(title.clone()));
    }

    for title in &titles {
        assert_eq!(lists.iter().filter(|l| &l.title == title).count(), 1);
        assert_eq!(
            validate_list_title(title, &lists),
            Some(ValidationError::DuplicateTitle)
        );
    }
}

#[test]
fn test_sort_items_is_idempotent() {
    let mut list = TodoList::new("Mixed");
    for title in ["pears", "Apples", "kiwi", "apples", "Bananas", "figs"] {
        list.add_todo(title);
    }
    list.todos[1].completed = true;
    list.todos[4].completed = true;

    let once = sort_items(&list.todos, is_todo_completed);
    let twice = sort_items(&once, is_todo_completed);
    assert_eq!(once, twice);

    let completed_flags: Vec<bool> = once.iter().map(|t| t.completed).collect();
    assert_eq!(completed_flags, vec![false, false, false, false, true, true]);
}

#[test]
fn test_deleting_unknown_todo_keeps_length() {
    let mut list = TodoList::new("Chores");
    list.add_todo("Dishes");
    list.add_todo("Laundry");

    delete_todo_by_id(&TodoId::from_string("not-a-real-id"), &mut list);
    assert_eq!(list.todos.len(), 2);
}
