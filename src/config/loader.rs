// Configuration loader
// Loads settings from ~/.autodocstring/config.toml (or an explicit path)
// and the API key from the config file or the environment

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::API_KEY_ENV;
use super::settings::{Config, ConfigError, OracleConfig, RefineConfig};

/// On-disk layout of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub source_extension: Option<String>,
    #[serde(default)]
    pub oracle: Option<OracleConfig>,
    #[serde(default)]
    pub refine: Option<RefineConfig>,
}

/// Load configuration for the entry point.
///
/// An explicit `path` must exist. Without one, `~/.autodocstring/config.toml`
/// is used when present. The environment credential wins over the file.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let file = match path {
        Some(path) => Some(read_config_file(path)?),
        None => match default_config_path() {
            Some(path) if path.exists() => Some(read_config_file(&path)?),
            _ => None,
        },
    };

    let env_key = std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty());

    Ok(resolve(file, env_key)?)
}

/// Merge a parsed config file with the environment credential.
///
/// Only the credential's presence is checked here. Call `Config::validate`
/// once command-line overrides have been applied.
pub fn resolve(file: Option<FileConfig>, env_key: Option<String>) -> Result<Config, ConfigError> {
    let file = file.unwrap_or_default();

    let api_key = env_key
        .or(file.api_key)
        .ok_or(ConfigError::MissingCredential)?;

    let mut config = Config::with_api_key(api_key);
    if let Some(oracle) = file.oracle {
        config.oracle = oracle;
    }
    if let Some(refine) = file.refine {
        config.refine = refine;
    }
    if let Some(ext) = file.source_extension {
        config.source_extension = ext.trim_start_matches('.').to_string();
    }

    Ok(config)
}

/// Parse config file contents
pub fn parse_config(contents: &str) -> Result<FileConfig> {
    toml::from_str(contents).context("Failed to parse config file")
}

fn read_config_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    parse_config(&contents).with_context(|| format!("Invalid config file {}", path.display()))
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".autodocstring").join("config.toml"))
}
