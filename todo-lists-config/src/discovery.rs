//! Configuration file discovery
//!
//! Looks for `todo-lists.{toml,yaml,yml,json}` in the global directory
//! (`~/.todo-lists/`) and in the project directory (the working directory by
//! default). Project files override global ones.

use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Base name shared by every recognised configuration file
pub const CONFIG_FILE_STEM: &str = "todo-lists";

const CONFIG_FILE_NAMES: [&str; 4] = [
    "todo-lists.toml",
    "todo-lists.yaml",
    "todo-lists.yml",
    "todo-lists.json",
];

/// Represents a discovered configuration file with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Full path to the configuration file
    pub path: PathBuf,
    /// Detected format of the file
    pub format: ConfigFormat,
    /// Where the file was found
    pub scope: ConfigScope,
}

impl ConfigFile {
    /// Classify a path by its extension; `None` for unknown extensions
    pub fn from_path(path: impl Into<PathBuf>, scope: ConfigScope) -> Option<Self> {
        let path = path.into();
        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ConfigFormat::from_extension)?;
        Some(Self {
            path,
            format,
            scope,
        })
    }
}

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Where a configuration file was discovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigScope {
    /// `~/.todo-lists/`
    Global,
    /// The project (working) directory
    Project,
    /// Passed with `--config`
    Explicit,
}

/// File discovery service for finding configuration files
#[derive(Debug, Default)]
pub struct FileDiscovery {
    project_dir: Option<PathBuf>,
    global_dir: Option<PathBuf>,
}

impl FileDiscovery {
    /// Discovery rooted at the current working directory and the home directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovery with explicit directories, bypassing cwd and home lookup
    pub fn with_directories(project_dir: Option<PathBuf>, global_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            global_dir,
        }
    }

    /// Discover all configuration files, lowest precedence first
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let project_dir = self.project_dir.clone().or_else(Self::resolve_project_dir);
        let global_dir = self.global_dir.clone().or_else(Self::resolve_global_dir);

        let mut files = Vec::new();
        if let Some(ref dir) = global_dir {
            files.extend(self.search_directory(dir, ConfigScope::Global));
        }
        if let Some(ref dir) = project_dir {
            files.extend(self.search_directory(dir, ConfigScope::Project));
        }

        debug!("Discovered {} configuration files", files.len());
        for file in &files {
            trace!("Found config: {} ({:?})", file.path.display(), file.format);
        }
        files
    }

    fn search_directory(&self, dir: &Path, scope: ConfigScope) -> Vec<ConfigFile> {
        if !dir.exists() {
            debug!("Directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .filter(|candidate| candidate.is_file())
            .filter_map(|candidate| ConfigFile::from_path(candidate, scope))
            .collect()
    }

    fn resolve_project_dir() -> Option<PathBuf> {
        std::env::current_dir().ok()
    }

    fn resolve_global_dir() -> Option<PathBuf> {
        let dir = dirs::home_dir()?.join(format!(".{CONFIG_FILE_STEM}"));
        dir.is_dir().then_some(dir)
    }
}
