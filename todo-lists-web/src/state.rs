//! Shared application state handed to every handler

use crate::error::ServerError;
use crate::session::{FileSessionStore, MemorySessionStore, SessionStore};
use std::sync::Arc;
use todo_lists_config::{SessionConfig, SessionStoreKind};
use todo_lists_templating::TemplateEngine;

/// Cheap-to-clone handles on the session store and compiled templates
#[derive(Debug, Clone)]
pub struct AppState {
    store: Arc<dyn SessionStore>,
    templates: Arc<TemplateEngine>,
    cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SessionStore>,
        templates: Arc<TemplateEngine>,
        cookie_name: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            store,
            templates,
            cookie_name: cookie_name.into(),
        }
    }

    /// Build the state for a session configuration, with the built-in templates
    pub async fn from_config(config: &SessionConfig) -> Result<Self, ServerError> {
        let store: Arc<dyn SessionStore> = match config.store {
            SessionStoreKind::Memory => {
                tracing::info!("Using in-memory session store");
                Arc::new(MemorySessionStore::new())
            }
            SessionStoreKind::File => {
                tracing::info!(
                    "Using file session store in {}",
                    config.directory.display()
                );
                Arc::new(FileSessionStore::open(&config.directory).await?)
            }
        };

        let templates = Arc::new(TemplateEngine::builtin()?);
        Ok(Self::new(store, templates, config.cookie_name.as_str()))
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        Arc::clone(&self.store)
    }

    pub fn templates(&self) -> &TemplateEngine {
        &self.templates
    }

    pub fn cookie_name(&self) -> &str {
        &self.cookie_name
    }
}
