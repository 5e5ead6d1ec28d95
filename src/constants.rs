pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const CONFIG_FILE: &str = ".github-issues-cli-config.json";
pub const USER_AGENT: &str = concat!("github-issues-cli/", env!("CARGO_PKG_VERSION"));

pub const DEFAULT_PATH: &str = "the-road-to-learn-react/the-road-to-learn-react";
pub const TITLE: &str = "GitHub Issues";

// Environment variables consulted for the bearer token, in order
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GITHUB_PERSONAL_ACCESS_TOKEN"];
pub const API_URL_ENV_VAR: &str = "GITHUB_GRAPHQL_URL";
