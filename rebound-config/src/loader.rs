use std::{
    env, fs,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::error::ConfigError;
use crate::models::ScrollConfig;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "REBOUND_CONFIG_PATH";
/// Environment variable holding an inline JSON config.
pub const CONFIG_JSON_ENV: &str = "REBOUND_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "rebound.toml",
    "rebound.json",
    "config/rebound.toml",
    "config/rebound.json",
];

/// Source that produced the scroll configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl ScrollConfig {
    /// Load configuration overrides using environment variables.
    /// Evaluation order:
    /// 1) `$REBOUND_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REBOUND_CONFIG_JSON` (inline JSON),
    /// 3) `rebound.toml` / `rebound.json` in the working directory or
    ///    `config/`,
    /// 4) defaults.
    pub fn load_from_env() -> Result<(Self, ConfigSource), ConfigError> {
        Self::load_from_lookup(|key| env::var(key).ok(), Path::new("."))
    }

    /// [`load_from_env`](Self::load_from_env) with an injectable variable
    /// lookup and search root.
    pub fn load_from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        search_root: &Path,
    ) -> Result<(Self, ConfigSource), ConfigError> {
        if let Some(path_str) = lookup(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str.trim());
            let config = Self::load_from_path(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let config = Self::from_json_str(&raw)?;
            return Ok((config, ConfigSource::EnvInline));
        }

        if let Some(path) = find_default_file(search_root) {
            let config = Self::load_from_path(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        debug!("no rebound config found; using defaults");
        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read a config file, choosing the format from its extension.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") | Some("tml") => toml::from_str(&contents)
                .map_err(|source| ConfigError::Toml {
                    path: Some(path.to_path_buf()),
                    source,
                })?,
            Some("json") => serde_json::from_str(&contents).map_err(
                |source| ConfigError::Json {
                    path: Some(path.to_path_buf()),
                    source,
                },
            )?,
            _ => {
                return Err(ConfigError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };

        debug!(path = %path.display(), "loaded rebound config");
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        toml::from_str(raw)
            .map_err(|source| ConfigError::Toml { path: None, source })
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw)
            .map_err(|source| ConfigError::Json { path: None, source })
    }

    /// Render the full option tree, defaults included.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }
}

fn find_default_file(root: &Path) -> Option<PathBuf> {
    DEFAULT_CANDIDATES
        .iter()
        .map(|candidate| root.join(candidate))
        .find(|path| path.is_file())
}
