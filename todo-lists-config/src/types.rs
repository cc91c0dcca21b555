//! Strongly typed server configuration

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Default listen address
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default listen port
pub const DEFAULT_PORT: u16 = 5003;
/// Default name of the session cookie
pub const DEFAULT_COOKIE_NAME: &str = "todo_lists_session";
/// Default directory of the file session store
pub const DEFAULT_SESSION_DIR: &str = ".todo-lists/sessions";

/// Top-level configuration of the todo lists server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// Port to bind; 0 picks a free port
    pub port: u16,
    /// Session handling
    pub session: SessionConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            session: SessionConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Check values that deserialize fine but cannot be served with
    pub fn validate(&self) -> ConfigResult<()> {
        self.host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::invalid_value("host", e.to_string()))?;
        self.session.validate()
    }

    /// Socket address built from `host` and `port`
    pub fn socket_addr(&self) -> ConfigResult<SocketAddr> {
        let ip = self
            .host
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::invalid_value("host", e.to_string()))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Which backend keeps session records between requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreKind {
    /// Process memory; sessions vanish on restart
    #[default]
    Memory,
    /// One YAML file per session under `session.directory`
    File,
}

/// Session cookie and storage settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub store: SessionStoreKind,
    pub directory: PathBuf,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            store: SessionStoreKind::default(),
            directory: PathBuf::from(DEFAULT_SESSION_DIR),
        }
    }
}

impl SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.cookie_name.is_empty() {
            return Err(ConfigError::invalid_value(
                "session.cookie_name",
                "must not be empty",
            ));
        }

        // RFC 6265 cookie-name is an RFC 2616 token
        let separators = "()<>@,;:\\\"/[]?={} \t";
        if let Some(bad) = self
            .cookie_name
            .chars()
            .find(|c| !c.is_ascii() || c.is_ascii_control() || separators.contains(*c))
        {
            return Err(ConfigError::invalid_value(
                "session.cookie_name",
                format!("contains invalid character {bad:?}"),
            ));
        }

        if self.store == SessionStoreKind::File && self.directory.as_os_str().is_empty() {
            return Err(ConfigError::invalid_value(
                "session.directory",
                "required when session.store is 'file'",
            ));
        }

        Ok(())
    }
}
