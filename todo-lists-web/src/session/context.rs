//! Per-request session context and the cookie layer feeding it

use super::{FlashMessage, SessionData, SessionError, SessionId, SessionStore};
use crate::error::WebError;
use crate::state::AppState;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use todo_lists::TodoList;

/// Find a well-formed session id in the request's `Cookie` headers
pub fn session_id_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == cookie_name)
        .and_then(|(_, value)| SessionId::parse(value))
}

/// `Set-Cookie` value issuing a session id
pub fn set_cookie_header(cookie_name: &str, id: &SessionId) -> String {
    format!("{cookie_name}={id}; Path=/; HttpOnly; SameSite=Lax")
}

/// Middleware attaching a session id to every request
///
/// Requests without a valid session cookie get a fresh id, which is sent
/// back in a `Set-Cookie` header on the response.
pub async fn session_cookie_layer(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let (id, issued) = match session_id_from_headers(request.headers(), state.cookie_name()) {
        Some(id) => (id, false),
        None => (SessionId::new(), true),
    };
    request.extensions_mut().insert(id.clone());

    let mut response = next.run(request).await;

    if issued {
        tracing::debug!(session = %id, "Issuing new session cookie");
        match HeaderValue::from_str(&set_cookie_header(state.cookie_name(), &id)) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => tracing::error!("Session cookie header is invalid: {}", e),
        }
    }

    response
}

/// Explicit handle on one client's session for the duration of a request
///
/// Handlers read the lists, build an updated copy, hand it back with
/// [`SessionContext::set_lists`] and finish with [`SessionContext::commit`].
#[derive(Debug)]
pub struct SessionContext {
    id: SessionId,
    store: Arc<dyn SessionStore>,
    data: SessionData,
    dirty: bool,
    /// Whether the store currently holds a record for this session
    stored: bool,
}

impl SessionContext {
    /// Load the session, starting from an empty record if none is stored
    ///
    /// An empty session is not written back until something is put in it.
    pub async fn load(store: Arc<dyn SessionStore>, id: SessionId) -> Result<Self, SessionError> {
        let (data, stored) = match store.load(&id).await? {
            Some(data) => (data, true),
            None => (SessionData::default(), false),
        };
        Ok(Self {
            id,
            store,
            data,
            dirty: false,
            stored,
        })
    }

    /// Lists in storage (insertion) order
    pub fn lists(&self) -> &[TodoList] {
        &self.data.lists
    }

    /// Replace the session's lists
    pub fn set_lists(&mut self, lists: Vec<TodoList>) {
        self.data.lists = lists;
        self.dirty = true;
    }

    /// Queue a notification for the next rendered page
    pub fn flash(&mut self, message: FlashMessage) {
        self.data.flash.push(message);
        self.dirty = true;
    }

    /// Drain pending notifications for rendering
    pub fn take_flashes(&mut self) -> Vec<FlashMessage> {
        if !self.data.flash.is_empty() {
            self.dirty = true;
        }
        std::mem::take(&mut self.data.flash)
    }

    /// Write the session back if anything changed
    ///
    /// A session left with no lists and no pending flashes is dropped from
    /// the store rather than kept as an empty record.
    pub async fn commit(&mut self) -> Result<(), SessionError> {
        if !self.dirty {
            return Ok(());
        }

        if self.data == SessionData::default() {
            if self.stored {
                tracing::debug!(session = %self.id, "Dropping empty session");
                self.store.remove(&self.id).await?;
                self.stored = false;
            }
        } else {
            self.store.store(&self.id, &self.data).await?;
            self.stored = true;
        }
        self.dirty = false;
        Ok(())
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for SessionContext {
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let id = parts
            .extensions
            .get::<SessionId>()
            .cloned()
            .ok_or(SessionError::MissingSessionId)?;
        Ok(SessionContext::load(state.store(), id).await?)
    }
}
