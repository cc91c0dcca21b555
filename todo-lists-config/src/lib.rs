//! Todo Lists configuration management using Figment
//!
//! # Features
//!
//! - **Multiple file formats**: TOML, YAML, JSON detected from the extension
//! - **File discovery**: `todo-lists.*` in `~/.todo-lists/` and in the working directory
//! - **Environment integration**: `TODO_LISTS_` prefix, `__` separates nested keys
//! - **Validation**: values that deserialize but cannot be served with are rejected up front
//!
//! # Quick Start
//!
//! ```no_run
//! use todo_lists_config::load_configuration;
//!
//! let config = load_configuration(None)?;
//! println!("listening on {}:{}", config.host, config.port);
//! # Ok::<(), todo_lists_config::ConfigError>(())
//! ```
//!
//! # Example TOML Configuration
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//!
//! [session]
//! cookie_name = "todo_lists_session"
//! store = "file"
//! directory = "/var/lib/todo-lists/sessions"
//! ```

pub mod discovery;
pub mod error;
pub mod provider;
pub mod types;

pub use discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery};
pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, ENV_PREFIX};
pub use types::{
    ServerConfig, SessionConfig, SessionStoreKind, DEFAULT_COOKIE_NAME, DEFAULT_HOST,
    DEFAULT_PORT, DEFAULT_SESSION_DIR,
};

use std::path::PathBuf;

/// Load the server configuration from all standard sources
///
/// `explicit_file` is merged above discovered files and below the environment.
pub fn load_configuration(explicit_file: Option<PathBuf>) -> ConfigResult<ServerConfig> {
    ConfigProvider::new()
        .with_explicit_file(explicit_file)
        .load()
}
