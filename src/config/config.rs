use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{API_URL_ENV_VAR, CONFIG_FILE, DEFAULT_PATH, GITHUB_GRAPHQL_URL, TOKEN_ENV_VARS};
use crate::error::{IssuesError, IssuesResult};
use crate::models::RepositoryPath;

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    pub token: Option<String>,
    #[serde(default)]
    pub default_path: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

pub fn config_path() -> IssuesResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| IssuesError::ConfigError("Could not find home directory".to_string()))?;
    Ok(home_dir.join(CONFIG_FILE))
}

pub fn load_config() -> IssuesResult<Config> {
    load_config_from(&config_path()?)
}

/// Read the config at `path`; a missing file yields the default config.
pub fn load_config_from(path: &Path) -> IssuesResult<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let config_str = fs::read_to_string(path)?;
    serde_json::from_str(&config_str)
        .map_err(|e| IssuesError::ConfigError(format!("{}: {}", path.display(), e)))
}

pub fn save_config(config: &Config) -> IssuesResult<()> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &Config, path: &Path) -> IssuesResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

/// Bearer token: environment first, then the config file.
pub fn get_token(config: &Config) -> IssuesResult<String> {
    let from_env = TOKEN_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|value| !value.trim().is_empty());

    from_env
        .or_else(|| config.token.clone())
        .filter(|token| !token.trim().is_empty())
        .ok_or(IssuesError::MissingToken)
}

pub fn get_api_url(config: &Config) -> String {
    env::var(API_URL_ENV_VAR)
        .ok()
        .or_else(|| config.api_url.clone())
        .unwrap_or_else(|| GITHUB_GRAPHQL_URL.to_string())
}

pub fn get_default_path(config: &Config) -> IssuesResult<RepositoryPath> {
    RepositoryPath::parse(config.default_path.as_deref().unwrap_or(DEFAULT_PATH))
}
