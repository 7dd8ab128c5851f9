use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseError, Result};

/// Name of the optional configuration file.
pub const CONFIG_FILE_NAME: &str = "redot-release.toml";

/// Environment variable holding the build-scripts checkout with the checksum listings.
pub const BASEDIR_VAR: &str = "basedir";

/// Environment variable holding the builds repository the manifest is written into.
pub const BUILDSDIR_VAR: &str = "buildsdir";

/// Represents the complete configuration file for the release tools.
///
/// Every field has a default, so an absent or empty file reproduces the
/// stock Redot output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct ToolsConfig {
    #[serde(default)]
    pub links: ProjectLinks,

    #[serde(default)]
    pub notes: NotesConfig,
}

fn default_news_url() -> String {
    "https://redotengine.org/news".to_string()
}

fn default_repository_url() -> String {
    "https://github.com/Redot-Engine/redot-engine".to_string()
}

fn default_notes_dir() -> PathBuf {
    PathBuf::from("./tmp")
}

/// Public URLs referenced from the release notes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectLinks {
    /// Base of the news site; release posts live at `{news_url}/release-{slug}/`
    #[serde(default = "default_news_url")]
    pub news_url: String,

    /// Engine repository, used for issues, commits and changelog links
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

impl Default for ProjectLinks {
    fn default() -> Self {
        ProjectLinks {
            news_url: default_news_url(),
            repository_url: default_repository_url(),
        }
    }
}

/// Where the notes generator writes its output.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct NotesConfig {
    #[serde(default = "default_notes_dir")]
    pub output_dir: PathBuf,
}

impl Default for NotesConfig {
    fn default() -> Self {
        NotesConfig {
            output_dir: default_notes_dir(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `redot-release.toml` in current directory
/// 3. `redot-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(ToolsConfig)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<ToolsConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(ToolsConfig::default());
        }
    } else {
        return Ok(ToolsConfig::default());
    };

    let config: ToolsConfig = toml::from_str(&config_str)?;
    Ok(config)
}

/// Directories the manifest builder works with, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEnv {
    /// Root of the per-release checksum listings
    pub base_dir: PathBuf,
    /// Output root for the release manifest
    pub builds_dir: PathBuf,
}

impl ManifestEnv {
    pub fn new(base_dir: impl Into<PathBuf>, builds_dir: impl Into<PathBuf>) -> Self {
        ManifestEnv {
            base_dir: base_dir.into(),
            builds_dir: builds_dir.into(),
        }
    }

    /// Resolve from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve through an arbitrary variable lookup.
    ///
    /// Both variables must be present and non-empty.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        match (read(BASEDIR_VAR), read(BUILDSDIR_VAR)) {
            (Some(base_dir), Some(builds_dir)) => Ok(ManifestEnv::new(base_dir, builds_dir)),
            _ => Err(ReleaseError::config(format!(
                "Missing '{}' (godot-build-scripts) and '{}' (godot-builds) environment variables",
                BASEDIR_VAR, BUILDSDIR_VAR
            ))),
        }
    }
}
