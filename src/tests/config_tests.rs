use std::env;

use crate::config::{get_api_url, get_default_path, get_token, load_config_from, save_config_to, Config};
use crate::constants::{API_URL_ENV_VAR, DEFAULT_PATH, GITHUB_GRAPHQL_URL, TOKEN_ENV_VARS};
use crate::error::IssuesError;

fn token_env_is_set() -> bool {
    TOKEN_ENV_VARS.iter().any(|name| env::var(name).is_ok())
}

#[test]
fn test_missing_config_file_yields_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("absent.json")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_config_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let config = Config {
        token: Some("ghp_test".to_string()),
        default_path: Some("rust-lang/rust".to_string()),
        api_url: None,
    };

    save_config_to(&config, &path).unwrap();
    assert_eq!(load_config_from(&path).unwrap(), config);
}

#[test]
fn test_malformed_config_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(load_config_from(&path), Err(IssuesError::ConfigError(_))));
}

#[test]
fn test_older_config_without_optional_fields_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{ "token": "abc" }"#).unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.token.as_deref(), Some("abc"));
    assert!(config.default_path.is_none());
}

#[test]
fn test_default_path_falls_back_to_built_in() {
    let path = get_default_path(&Config::default()).unwrap();
    assert_eq!(path.to_string(), DEFAULT_PATH);

    let config = Config {
        default_path: Some("not-a-path".to_string()),
        ..Config::default()
    };
    assert!(matches!(get_default_path(&config), Err(IssuesError::InvalidPath(_))));
}

#[test]
fn test_token_comes_from_config_when_env_is_unset() {
    if token_env_is_set() {
        return;
    }

    let config = Config {
        token: Some("ghp_from_file".to_string()),
        ..Config::default()
    };
    assert_eq!(get_token(&config).unwrap(), "ghp_from_file");
    assert!(matches!(get_token(&Config::default()), Err(IssuesError::MissingToken)));
}

#[test]
fn test_api_url_defaults_to_github() {
    if env::var(API_URL_ENV_VAR).is_ok() {
        return;
    }

    assert_eq!(get_api_url(&Config::default()), GITHUB_GRAPHQL_URL);
    let config = Config {
        api_url: Some("http://localhost:9999/graphql".to_string()),
        ..Config::default()
    };
    assert_eq!(get_api_url(&config), "http://localhost:9999/graphql");
}
