//! Route handlers
//!
//! Handlers copy the session's lists, change the copy, hand it back to the
//! session and commit. Validation failures re-render the submitting form with
//! an error flash; successful writes redirect with `303 See Other`.

use crate::error::WebError;
use crate::session::{FlashMessage, SessionContext};
use crate::state::AppState;
use crate::views;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use todo_lists::{
    delete_list_by_id, delete_todo_by_id, find_list_by_id, find_list_by_id_mut,
    find_todo_by_id_mut, mark_all_completed, validate_list_title, validate_todo_title, ListId,
    Todo, TodoId, TodoList,
};

type HandlerResult = Result<Response, WebError>;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ListForm {
    pub list_title: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TodoForm {
    pub todo: String,
}

/// Toggle submission; without `completed` the current state is flipped
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ToggleForm {
    pub completed: Option<String>,
}

fn require_list<'a>(lists: &'a [TodoList], id: &ListId) -> Result<&'a TodoList, WebError> {
    find_list_by_id(id, lists).ok_or_else(|| WebError::ListNotFound(id.clone()))
}

fn require_list_mut<'a>(
    lists: &'a mut [TodoList],
    id: &ListId,
) -> Result<&'a mut TodoList, WebError> {
    find_list_by_id_mut(id, lists).ok_or_else(|| WebError::ListNotFound(id.clone()))
}

fn require_todo_mut<'a>(list: &'a mut TodoList, id: &TodoId) -> Result<&'a mut Todo, WebError> {
    find_todo_by_id_mut(id, &mut list.todos).ok_or_else(|| WebError::TodoNotFound(id.clone()))
}

fn redirect_to_list(id: &ListId) -> Response {
    Redirect::to(&format!("/lists/{id}")).into_response()
}

/// Persist a successful change and send the client on to `target`
async fn finish(session: &mut SessionContext, message: &str, target: Response) -> HandlerResult {
    session.flash(FlashMessage::success(message));
    session.commit().await?;
    Ok(target)
}

pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

pub async fn list_lists(State(state): State<AppState>, mut session: SessionContext) -> HandlerResult {
    let flashes = session.take_flashes();
    let page = views::render_lists(state.templates(), session.lists(), &flashes)?;
    session.commit().await?;
    Ok(page.into_response())
}

pub async fn new_list_form(
    State(state): State<AppState>,
    mut session: SessionContext,
) -> HandlerResult {
    let flashes = session.take_flashes();
    let page = views::render_new_list(state.templates(), "", &flashes)?;
    session.commit().await?;
    Ok(page.into_response())
}

pub async fn create_list(
    State(state): State<AppState>,
    mut session: SessionContext,
    Form(form): Form<ListForm>,
) -> HandlerResult {
    let title = form.list_title.trim();

    if let Some(error) = validate_list_title(title, session.lists()) {
        tracing::debug!("Rejected new list title {:?}: {}", title, error);
        session.flash(FlashMessage::error(error.to_string()));
        let flashes = session.take_flashes();
        let page = views::render_new_list(state.templates(), title, &flashes)?;
        session.commit().await?;
        return Ok(page.into_response());
    }

    let mut lists = session.lists().to_vec();
    let list = TodoList::new(title);
    tracing::info!(list = %list.id, "Created list {:?}", title);
    lists.push(list);
    session.set_lists(lists);

    finish(
        &mut session,
        "The list has been created.",
        Redirect::to("/lists").into_response(),
    )
    .await
}

pub async fn show_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    mut session: SessionContext,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let list = require_list(session.lists(), &list_id)?.clone();

    let flashes = session.take_flashes();
    let page = views::render_list(state.templates(), &list, "", &flashes)?;
    session.commit().await?;
    Ok(page.into_response())
}

pub async fn edit_list_form(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    mut session: SessionContext,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let list = require_list(session.lists(), &list_id)?.clone();

    let flashes = session.take_flashes();
    let page = views::render_edit_list(state.templates(), &list, &list.title, &flashes)?;
    session.commit().await?;
    Ok(page.into_response())
}

/// Rename a list
///
/// The uniqueness check runs against every list, including the one being
/// renamed, so resubmitting the current title is rejected.
pub async fn update_list(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    mut session: SessionContext,
    Form(form): Form<ListForm>,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let title = form.list_title.trim();
    let mut lists = session.lists().to_vec();
    let list = require_list_mut(&mut lists, &list_id)?;

    if let Some(error) = validate_list_title(title, session.lists()) {
        tracing::debug!(list = %list_id, "Rejected list title {:?}: {}", title, error);
        let list = list.clone();
        session.flash(FlashMessage::error(error.to_string()));
        let flashes = session.take_flashes();
        let page = views::render_edit_list(state.templates(), &list, title, &flashes)?;
        session.commit().await?;
        return Ok(page.into_response());
    }

    tracing::info!(list = %list_id, "Renamed list {:?} to {:?}", list.title, title);
    list.title = title.to_string();
    session.set_lists(lists);

    finish(
        &mut session,
        "The list has been updated.",
        redirect_to_list(&list_id),
    )
    .await
}

pub async fn delete_list(
    Path(list_id): Path<String>,
    mut session: SessionContext,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let mut lists = session.lists().to_vec();
    require_list(&lists, &list_id)?;

    delete_list_by_id(&list_id, &mut lists);
    tracing::info!(list = %list_id, "Deleted list");
    session.set_lists(lists);

    finish(
        &mut session,
        "The list has been deleted.",
        Redirect::to("/lists").into_response(),
    )
    .await
}

pub async fn create_todo(
    State(state): State<AppState>,
    Path(list_id): Path<String>,
    mut session: SessionContext,
    Form(form): Form<TodoForm>,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let title = form.todo.trim();
    let mut lists = session.lists().to_vec();
    let list = require_list_mut(&mut lists, &list_id)?;

    if let Some(error) = validate_todo_title(title) {
        tracing::debug!(list = %list_id, "Rejected todo title {:?}: {}", title, error);
        let list = list.clone();
        session.flash(FlashMessage::error(error.to_string()));
        let flashes = session.take_flashes();
        let page = views::render_list(state.templates(), &list, title, &flashes)?;
        session.commit().await?;
        return Ok(page.into_response());
    }

    let todo_id = list.add_todo(title).id.clone();
    tracing::info!(list = %list_id, todo = %todo_id, "Added todo {:?}", title);
    session.set_lists(lists);

    finish(&mut session, "The todo was added.", redirect_to_list(&list_id)).await
}

/// Set, clear or flip a todo's completion flag
///
/// `completed=true` (or `True`) marks the todo done, any other value clears
/// it, and a missing field flips the current state.
pub async fn toggle_todo(
    Path((list_id, todo_id)): Path<(String, String)>,
    mut session: SessionContext,
    Form(form): Form<ToggleForm>,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let todo_id = TodoId::from_string(todo_id);
    let mut lists = session.lists().to_vec();
    let list = require_list_mut(&mut lists, &list_id)?;
    let todo = require_todo_mut(list, &todo_id)?;

    todo.completed = match form.completed.as_deref() {
        Some(value) => value == "true" || value == "True",
        None => !todo.completed,
    };
    tracing::info!(list = %list_id, todo = %todo_id, completed = todo.completed, "Toggled todo");
    session.set_lists(lists);

    finish(
        &mut session,
        "The todo has been updated.",
        redirect_to_list(&list_id),
    )
    .await
}

pub async fn delete_todo(
    Path((list_id, todo_id)): Path<(String, String)>,
    mut session: SessionContext,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let todo_id = TodoId::from_string(todo_id);
    let mut lists = session.lists().to_vec();
    let list = require_list_mut(&mut lists, &list_id)?;
    require_todo_mut(list, &todo_id)?;

    delete_todo_by_id(&todo_id, list);
    tracing::info!(list = %list_id, todo = %todo_id, "Deleted todo");
    session.set_lists(lists);

    finish(
        &mut session,
        "The todo has been deleted.",
        redirect_to_list(&list_id),
    )
    .await
}

pub async fn complete_all(
    Path(list_id): Path<String>,
    mut session: SessionContext,
) -> HandlerResult {
    let list_id = ListId::from_string(list_id);
    let mut lists = session.lists().to_vec();
    let list = require_list_mut(&mut lists, &list_id)?;

    mark_all_completed(list);
    tracing::info!(list = %list_id, "Completed all todos");
    session.set_lists(lists);

    finish(
        &mut session,
        "All todos have been updated.",
        redirect_to_list(&list_id),
    )
    .await
}
