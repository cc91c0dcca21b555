//! In-process session store

use super::{SessionData, SessionError, SessionId, SessionStore};
use async_trait::async_trait;
use dashmap::DashMap;

/// Keeps session records in memory; everything is lost on restart
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<SessionId, SessionData>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with stored state, for inspection in tests and
    /// diagnostics
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionData>, SessionError> {
        Ok(self.sessions.get(id).map(|entry| entry.value().clone()))
    }

    async fn store(&self, id: &SessionId, data: &SessionData) -> Result<(), SessionError> {
        self.sessions.insert(id.clone(), data.clone());
        Ok(())
    }

    async fn remove(&self, id: &SessionId) -> Result<(), SessionError> {
        self.sessions.remove(id);
        Ok(())
    }
}
