use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::IssuesError;

lazy_static! {
    static ref PATH_PATTERN: Regex = Regex::new(r"^([^/\s]+)/([^/\s]+)$").unwrap();
}

/// An `organization/repository` pair, validated on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RepositoryPath {
    organization: String,
    repository: String,
}

impl RepositoryPath {
    pub fn parse(input: &str) -> Result<Self, IssuesError> {
        let trimmed = input.trim();
        let captures = PATH_PATTERN
            .captures(trimmed)
            .ok_or_else(|| IssuesError::InvalidPath(input.to_string()))?;

        Ok(Self {
            organization: captures[1].to_string(),
            repository: captures[2].to_string(),
        })
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }
}

impl FromStr for RepositoryPath {
    type Err = IssuesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RepositoryPath {
    type Error = IssuesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<RepositoryPath> for String {
    fn from(path: RepositoryPath) -> Self {
        path.to_string()
    }
}

impl fmt::Display for RepositoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repository)
    }
}
