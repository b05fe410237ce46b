use relative_path::RelativePathBuf;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "readme-inject.toml";

const DEFAULT_PLACEHOLDER: &str = "<!-- README content will be inserted here during deployment -->";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Empty index placeholder in config file at {config_path}")]
    EmptyPlaceholder { config_path: PathBuf },

    #[error("Invalid API directory pattern {pattern:?}: {source}")]
    InvalidApiPattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("Failed to read API directory while expanding {pattern:?}: {source}")]
    ApiDirReadError {
        pattern: String,
        source: glob::GlobError,
    },
}

/// Where the deployment tree lives and what gets injected into it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site root; every other path is relative to it.
    pub root: PathBuf,
    /// Spec file name inside each API directory.
    pub spec_file: RelativePathBuf,
    /// README file name inside each API directory.
    pub readme_file: RelativePathBuf,
    /// API directories, as names or glob patterns relative to `root`.
    pub apis: Vec<String>,
    pub index: IndexPage,
}

/// The landing page that receives the rendered top-level README.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct IndexPage {
    pub enabled: bool,
    pub page: RelativePathBuf,
    pub readme: RelativePathBuf,
    pub placeholder: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            spec_file: RelativePathBuf::from("openapi.json"),
            readme_file: RelativePathBuf::from("README.md"),
            apis: Vec::new(),
            index: IndexPage::default(),
        }
    }
}

impl Default for IndexPage {
    fn default() -> Self {
        Self {
            enabled: true,
            page: RelativePathBuf::from("index.html"),
            readme: RelativePathBuf::from("README.md"),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl Config {
    /// Loads the config file, or `None` if it doesn't exist.
    ///
    /// `root` is shell-expanded, and a relative `root` is taken relative to
    /// the directory holding the config file.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        if config.index.placeholder.is_empty() {
            return Err(ConfigError::EmptyPlaceholder {
                config_path: config_path.to_path_buf(),
            });
        }

        // Expand shell variables and tilde in the loaded root
        config.root = Self::expand_path(&config.root).unwrap_or(config.root);
        if config.root.is_relative()
            && let Some(config_dir) = config_path.parent()
        {
            config.root = config_dir.join(&config.root);
        }

        Ok(Some(config))
    }

    /// Loads `readme-inject.toml` from the working directory.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(DEFAULT_CONFIG_FILE)
    }

    /// Expands `apis` into existing directories under `root`.
    ///
    /// Glob patterns contribute only the directories they match. A plain
    /// name is kept even when the directory is missing, so the missing spec
    /// shows up as a failed job instead of vanishing. The result is sorted
    /// and free of duplicates.
    pub fn api_dirs(&self) -> Result<Vec<PathBuf>, ConfigError> {
        let escaped_root = glob::Pattern::escape(&self.root.to_string_lossy());
        let mut dirs = Vec::new();

        for pattern in &self.apis {
            let full_pattern = format!("{escaped_root}/{pattern}");
            let entries =
                glob::glob(&full_pattern).map_err(|source| ConfigError::InvalidApiPattern {
                    pattern: pattern.clone(),
                    source,
                })?;

            let mut matched = false;
            for entry in entries {
                let path = entry.map_err(|source| ConfigError::ApiDirReadError {
                    pattern: pattern.clone(),
                    source,
                })?;
                if path.is_dir() {
                    dirs.push(path);
                    matched = true;
                }
            }

            if !matched && !Self::is_glob(pattern) {
                dirs.push(self.root.join(pattern));
            }
        }

        dirs.sort();
        dirs.dedup();
        Ok(dirs)
    }

    fn is_glob(pattern: &str) -> bool {
        pattern.contains(['*', '?', '['])
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
