//! Configuration provider using Figment

use crate::{
    discovery::{ConfigFile, ConfigFormat, ConfigScope, FileDiscovery},
    error::{ConfigError, ConfigResult},
    types::ServerConfig,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::PathBuf;
use tracing::{debug, info, trace};

/// Prefix of environment variables read into the configuration
///
/// Nested keys use `__`, e.g. `TODO_LISTS_SESSION__STORE=file`.
pub const ENV_PREFIX: &str = "TODO_LISTS_";

/// Configuration provider using figment
///
/// Sources are merged in precedence order (later sources override earlier ones):
/// 1. Default values
/// 2. Discovered configuration files (global, then project)
/// 3. An explicit configuration file, if one was given
/// 4. Environment variables with the `TODO_LISTS_` prefix
pub struct ConfigProvider {
    discovery: FileDiscovery,
    explicit_file: Option<PathBuf>,
}

impl ConfigProvider {
    /// Create a provider that discovers files from the working and home directories
    pub fn new() -> Self {
        Self {
            discovery: FileDiscovery::new(),
            explicit_file: None,
        }
    }

    /// Use a custom discovery service
    pub fn with_discovery(mut self, discovery: FileDiscovery) -> Self {
        self.discovery = discovery;
        self
    }

    /// Merge this file on top of the discovered ones
    pub fn with_explicit_file(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_file = path;
        self
    }

    /// Load and validate the server configuration
    pub fn load(&self) -> ConfigResult<ServerConfig> {
        debug!("Loading server configuration");

        let config: ServerConfig = self.build_figment()?.extract()?;
        config.validate()?;

        info!(
            "Loaded configuration: listening on {}:{}, {:?} session store",
            config.host, config.port, config.session.store
        );
        Ok(config)
    }

    fn build_figment(&self) -> ConfigResult<Figment> {
        let mut figment = Figment::from(Serialized::defaults(ServerConfig::default()));

        for file in self.discovery.discover_all() {
            figment = figment.merge(Self::file_provider(&file));
        }

        if let Some(path) = &self.explicit_file {
            if !path.is_file() {
                return Err(ConfigError::FileNotFound { path: path.clone() });
            }
            let file = ConfigFile::from_path(path.clone(), ConfigScope::Explicit)
                .ok_or_else(|| ConfigError::UnsupportedFormat { path: path.clone() })?;
            figment = figment.merge(Self::file_provider(&file));
        }

        trace!("Merging environment variables with prefix {}", ENV_PREFIX);
        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    fn file_provider(file: &ConfigFile) -> Figment {
        trace!(
            "Loading config file: {} ({:?})",
            file.path.display(),
            file.format
        );
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(&file.path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(&file.path)),
            ConfigFormat::Json => Figment::from(Json::file(&file.path)),
        }
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionStoreKind;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn isolated(project: &TempDir) -> ConfigProvider {
        let empty_global = project.path().join("no-global");
        ConfigProvider::new().with_discovery(FileDiscovery::with_directories(
            Some(project.path().to_path_buf()),
            Some(empty_global),
        ))
    }

    #[test]
    #[serial]
    fn test_defaults_without_sources() {
        let project = TempDir::new().unwrap();
        let config = isolated(&project).load().unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    #[serial]
    fn test_project_file_overrides_defaults() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("todo-lists.toml"),
            "port = 8080\n[session]\nstore = \"file\"\ndirectory = \"/tmp/sessions\"\n",
        )
        .unwrap();

        let config = isolated(&project).load().unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.session.store, SessionStoreKind::File);
        assert_eq!(config.session.directory, PathBuf::from("/tmp/sessions"));
    }

    #[test]
    #[serial]
    fn test_explicit_file_overrides_project_file() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("todo-lists.yaml"), "port: 9000\n").unwrap();
        let explicit = project.path().join("custom.json");
        fs::write(&explicit, r#"{"port": 9100}"#).unwrap();

        let config = isolated(&project)
            .with_explicit_file(Some(explicit))
            .load()
            .unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    #[serial]
    fn test_missing_explicit_file_is_an_error() {
        let project = TempDir::new().unwrap();
        let result = isolated(&project)
            .with_explicit_file(Some(project.path().join("absent.toml")))
            .load();
        assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
    }

    #[test]
    #[serial]
    fn test_unsupported_explicit_format() {
        let project = TempDir::new().unwrap();
        let explicit = project.path().join("settings.ini");
        fs::write(&explicit, "port=1").unwrap();

        let result = isolated(&project).with_explicit_file(Some(explicit)).load();
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    #[serial]
    fn test_env_overrides_files() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("todo-lists.toml"), "port = 8080\n").unwrap();

        std::env::set_var("TODO_LISTS_PORT", "7070");
        std::env::set_var("TODO_LISTS_SESSION__COOKIE_NAME", "sid");
        let result = isolated(&project).load();
        std::env::remove_var("TODO_LISTS_PORT");
        std::env::remove_var("TODO_LISTS_SESSION__COOKIE_NAME");

        let config = result.unwrap();
        assert_eq!(config.port, 7070);
        assert_eq!(config.session.cookie_name, "sid");
    }

    #[test]
    #[serial]
    fn test_invalid_value_fails_validation() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("todo-lists.toml"),
            "[session]\ncookie_name = \"has space\"\n",
        )
        .unwrap();

        let result = isolated(&project).load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    #[serial]
    fn test_malformed_file_is_parse_error() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("todo-lists.toml"), "port = \"many\"\n").unwrap();

        let result = isolated(&project).load();
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
