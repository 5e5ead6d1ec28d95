use serde::{Deserialize, Serialize};

/// Envelope of every GraphQL response. GitHub answers with HTTP 200 even when
/// `errors` is populated, and `data` may be partially or entirely null.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

impl<T> GraphQLResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            errors: None,
        }
    }

    /// Error messages in response order; `None` when the response carried none.
    pub fn error_messages(&self) -> Option<Vec<String>> {
        self.errors
            .as_ref()
            .filter(|errors| !errors.is_empty())
            .map(|errors| errors.iter().map(|e| e.message.clone()).collect())
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GraphQLError {
    pub message: String,
}

impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// Organization query data
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OrganizationData {
    #[serde(default)]
    pub organization: Option<super::Organization>,
}

pub type IssuesResponse = GraphQLResponse<OrganizationData>;
