use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Organization {
    /// Display name; GitHub leaves it null for organizations that never set one.
    pub name: Option<String>,
    pub url: String,
    #[serde(default)]
    pub repository: Option<Repository>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub url: String,
    pub issues: super::IssueConnection,
}
