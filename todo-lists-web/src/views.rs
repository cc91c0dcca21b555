//! View models and page rendering
//!
//! Every page context carries `page_title` and `flashes`, which the shared
//! header partial reads. Display ordering happens here; stored order is never
//! changed by rendering.

use crate::session::FlashMessage;
use axum::response::Html;
use serde::Serialize;
use todo_lists::{
    is_list_completed, is_todo_completed, remaining_count, sort_items, Todo, TodoList,
};
use todo_lists_templating::{Result, TemplateEngine};

/// One row of the list collection page
#[derive(Debug, Clone, Serialize)]
pub struct ListSummary {
    pub id: String,
    pub title: String,
    pub remaining: usize,
    pub todos_count: usize,
    pub completed: bool,
}

impl From<&TodoList> for ListSummary {
    fn from(list: &TodoList) -> Self {
        Self {
            id: list.id.to_string(),
            title: list.title.clone(),
            remaining: remaining_count(list),
            todos_count: list.todos.len(),
            completed: is_list_completed(list),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TodoView {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.clone(),
            completed: todo.completed,
        }
    }
}

/// A single list with its todos in display order
#[derive(Debug, Clone, Serialize)]
pub struct ListDetail {
    pub id: String,
    pub title: String,
    pub remaining: usize,
    pub todos_count: usize,
    pub completed: bool,
    pub todos: Vec<TodoView>,
}

impl From<&TodoList> for ListDetail {
    fn from(list: &TodoList) -> Self {
        let ListSummary {
            id,
            title,
            remaining,
            todos_count,
            completed,
        } = ListSummary::from(list);
        Self {
            id,
            title,
            remaining,
            todos_count,
            completed,
            todos: sort_items(&list.todos, is_todo_completed)
                .iter()
                .map(TodoView::from)
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct ListsPage<'a> {
    page_title: &'a str,
    flashes: &'a [FlashMessage],
    lists: Vec<ListSummary>,
}

#[derive(Serialize)]
struct NewListPage<'a> {
    page_title: &'a str,
    flashes: &'a [FlashMessage],
    title: &'a str,
}

#[derive(Serialize)]
struct ListPage<'a> {
    page_title: &'a str,
    flashes: &'a [FlashMessage],
    list: ListDetail,
    todo: &'a str,
}

#[derive(Serialize)]
struct EditListPage<'a> {
    page_title: &'a str,
    flashes: &'a [FlashMessage],
    list: ListSummary,
    title: &'a str,
}

/// All lists, incomplete first
pub fn render_lists(
    templates: &TemplateEngine,
    lists: &[TodoList],
    flashes: &[FlashMessage],
) -> Result<Html<String>> {
    let page = ListsPage {
        page_title: "My Lists",
        flashes,
        lists: sort_items(lists, is_list_completed)
            .iter()
            .map(ListSummary::from)
            .collect(),
    };
    templates.render_serialized("lists", &page).map(Html)
}

/// List-creation form, prefilled with `title`
pub fn render_new_list(
    templates: &TemplateEngine,
    title: &str,
    flashes: &[FlashMessage],
) -> Result<Html<String>> {
    let page = NewListPage {
        page_title: "New List",
        flashes,
        title,
    };
    templates.render_serialized("new_list", &page).map(Html)
}

/// Single list page; `todo` prefills the new-todo input
pub fn render_list(
    templates: &TemplateEngine,
    list: &TodoList,
    todo: &str,
    flashes: &[FlashMessage],
) -> Result<Html<String>> {
    let page = ListPage {
        page_title: &list.title,
        flashes,
        list: ListDetail::from(list),
        todo,
    };
    templates.render_serialized("list", &page).map(Html)
}

pub fn render_edit_list(
    templates: &TemplateEngine,
    list: &TodoList,
    title: &str,
    flashes: &[FlashMessage],
) -> Result<Html<String>> {
    let page = EditListPage {
        page_title: "Edit List",
        flashes,
        list: ListSummary::from(list),
        title,
    };
    templates.render_serialized("edit_list", &page).map(Html)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> TemplateEngine {
        TemplateEngine::builtin().unwrap()
    }

    #[test]
    fn test_list_detail_sorts_todos_for_display_only() {
        let mut list = TodoList::new("Chores");
        list.add_todo("dishes");
        list.add_todo("Laundry");
        list.add_todo("bins");
        list.todos[2].completed = true;

        let detail = ListDetail::from(&list);
        let titles: Vec<&str> = detail.todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["dishes", "Laundry", "bins"]);
        assert_eq!(detail.remaining, 2);
        assert_eq!(detail.todos_count, 3);

        // Stored order untouched
        assert_eq!(list.todos[0].title, "dishes");
        assert_eq!(list.todos[2].title, "bins");
    }

    #[test]
    fn test_render_lists_empty_message() {
        let html = render_lists(&engine(), &[], &[]).unwrap().0;
        assert!(html.contains("You don't have any todo lists"));
    }

    #[test]
    fn test_render_lists_puts_completed_last() {
        let mut done = TodoList::new("Alpha");
        done.add_todo("x");
        done.todos[0].completed = true;
        let open = TodoList::new("Zulu");

        let html = render_lists(&engine(), &[done, open], &[]).unwrap().0;
        let zulu = html.find("Zulu").unwrap();
        let alpha = html.find("Alpha").unwrap();
        assert!(zulu < alpha);
    }

    #[test]
    fn test_render_escapes_titles_and_shows_flashes() {
        let list = TodoList::new("<script>");
        let flashes = vec![FlashMessage::error("The title must be unique.")];

        let html = render_list(&engine(), &list, "", &flashes).unwrap().0;
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
        assert!(html.contains("flash error"));
        assert!(html.contains("The title must be unique."));
    }

    #[test]
    fn test_render_forms_prefill_input() {
        let html = render_new_list(&engine(), "Groceries", &[]).unwrap().0;
        assert!(html.contains("value=\"Groceries\""));

        let list = TodoList::new("Work");
        let html = render_edit_list(&engine(), &list, "Work stuff", &[]).unwrap().0;
        assert!(html.contains("value=\"Work stuff\""));
        assert!(html.contains(&format!("/lists/{}/delete", list.id)));
    }
}
