use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Directory printed when neither the CLI nor the config file names one
pub const DEFAULT_ROOT: &str = "Assets";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tree: TreeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    /// Directory to print
    pub root: PathBuf,
    /// What to do when a directory can't be listed for a reason other than permissions
    pub on_error: ErrorPolicy,
}

/// Handling of listing failures that are not permission denials
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Print an `[Unreadable]` leaf and keep going
    #[default]
    Placeholder,
    /// Stop the traversal and report the error
    Abort,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            on_error: ErrorPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit file, the user config directory, or defaults.
    ///
    /// An explicit path that can't be read is an error; a missing file in the
    /// default location is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// `$XDG_CONFIG_HOME/folder-tree/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folder-tree").join("config.toml"))
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Read config file");
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.tree.root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("tree.root must not be empty".into()).into());
        }
        Ok(())
    }
}
