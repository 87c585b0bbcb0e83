use crate::error::{ChangesError, Result};
use crate::store::StoreLayout;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file
pub const CONFIG_FILE: &str = ".changes.toml";

/// Represents the complete configuration for changes.
///
/// Lists the changelog files the project keeps and the tags each one groups
/// entries by.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_files")]
    pub files: Vec<ChangelogFile>,
}

/// A changelog document and the tags whose entries it collects.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ChangelogFile {
    pub path: String,

    #[serde(default)]
    pub tags: Vec<String>,
}

/// Returns the default Keep a Changelog tag set.
fn default_tags() -> Vec<String> {
    vec![
        "Added".to_string(),
        "Changed".to_string(),
        "Deprecated".to_string(),
        "Removed".to_string(),
        "Fixed".to_string(),
        "Security".to_string(),
    ]
}

/// Returns the default changelog file list.
fn default_files() -> Vec<ChangelogFile> {
    vec![ChangelogFile {
        path: "CHANGELOG.md".to_string(),
        tags: default_tags(),
    }]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            files: default_files(),
        }
    }
}

impl Config {
    /// All tags defined across every changelog file, in declaration order.
    pub fn all_tags(&self) -> Vec<&str> {
        self.files
            .iter()
            .flat_map(|file| file.tags.iter().map(String::as_str))
            .collect()
    }

    /// Looks up a tag case-insensitively and returns its declared spelling.
    pub fn defined_tag(&self, tag: &str) -> Option<&str> {
        self.all_tags()
            .into_iter()
            .find(|defined| defined.eq_ignore_ascii_case(tag))
    }
}

/// A configuration together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory containing the configuration file; the store lives next to it.
    pub fn project_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    pub fn layout(&self) -> StoreLayout {
        StoreLayout::for_project(self.project_dir())
    }
}

/// Loads configuration from file.
///
/// Attempts to locate the configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.changes.toml` in the current directory or the nearest ancestor
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(LoadedConfig)` - Loaded configuration and its location
/// * `Err` - If no file is found, or it cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<LoadedConfig> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => find_config(&env::current_dir()?)
            .ok_or_else(|| ChangesError::config("No config found."))?,
    };

    let config_str = fs::read_to_string(&path)
        .map_err(|e| ChangesError::config(format!("Cannot read {}: {}", path.display(), e)))?;
    let config: Config = toml::from_str(&config_str).map_err(|e| {
        ChangesError::config(format!("Invalid config file format: {}", e.message()))
    })?;

    let path = if path.is_absolute() {
        path
    } else {
        env::current_dir()?.join(path)
    };

    Ok(LoadedConfig { config, path })
}

/// Searches `start` and its ancestors for a configuration file.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE))
        .find(|candidate| candidate.is_file())
}
