//! Per-client session state and the stores that persist it
//!
//! A session is identified by a random uuid carried in a cookie. The whole
//! record is loaded at the start of a request and written back at the end;
//! stores never see partial updates.

mod context;
mod file;
mod memory;

pub use context::{session_cookie_layer, session_id_from_headers, set_cookie_header, SessionContext};
pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use todo_lists::TodoList;
use todo_lists_common::{ErrorSeverity, Severity};
use uuid::Uuid;

/// Identifier of one client's session
///
/// Only well-formed uuids are accepted, so an id is always safe to use as a
/// file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random session id
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id received from a client; `None` if malformed
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim()).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Kind of one-shot notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
}

/// Notification shown once on the next rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }
}

/// Everything persisted for one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default)]
    pub lists: Vec<TodoList>,
    #[serde(default)]
    pub flash: Vec<FlashMessage>,
}

/// Errors raised by session stores and the session context
#[derive(Debug, Error)]
pub enum SessionError {
    /// Reading or writing the backing storage failed
    #[error("Session storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored session record could not be encoded or decoded
    #[error("Session '{id}' could not be (de)serialized: {source}")]
    Serialization {
        id: String,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The request reached a handler without passing the session layer
    #[error("Request carries no session id")]
    MissingSessionId,
}

impl Severity for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SessionError::Io(_) => ErrorSeverity::Critical,
            SessionError::Serialization { .. } | SessionError::MissingSessionId => {
                ErrorSeverity::Error
            }
        }
    }
}

/// Backend persisting whole session records between requests
#[async_trait]
pub trait SessionStore: Send + Sync + fmt::Debug {
    /// Load a session record; `None` when the session has no stored state yet
    async fn load(&self, id: &SessionId) -> Result<Option<SessionData>, SessionError>;

    /// Replace the stored record for a session
    async fn store(&self, id: &SessionId, data: &SessionData) -> Result<(), SessionError>;

    /// Forget a session entirely
    async fn remove(&self, id: &SessionId) -> Result<(), SessionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::new();
        assert_eq!(SessionId::parse(&id.to_string()), Some(id));
        assert_eq!(SessionId::parse("../../etc/passwd"), None);
        assert_eq!(SessionId::parse(""), None);
    }

    #[test]
    fn test_flash_constructors() {
        assert_eq!(FlashMessage::success("ok").level, FlashLevel::Success);
        assert_eq!(FlashMessage::error("bad").level, FlashLevel::Error);
    }

    #[test]
    fn test_session_data_defaults_missing_fields() {
        let data: SessionData = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(data, SessionData::default());
    }

    #[test]
    fn test_session_error_severity() {
        let io = SessionError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
        assert_eq!(
            SessionError::MissingSessionId.severity(),
            ErrorSeverity::Error
        );
    }
}
