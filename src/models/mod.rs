pub mod graphql;
pub mod issue;
pub mod organization;
pub mod path;

// Re-export commonly used types
pub use graphql::{GraphQLError, GraphQLResponse, OrganizationData};
pub use issue::{Issue, IssueConnection, PageInfo, Reaction, ReactionConnection, ReactionContent};
pub use organization::{Organization, Repository};
pub use path::RepositoryPath;

use serde::{Deserialize, Serialize};

/// A single `{ node }` entry of a GraphQL connection
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Edge<T> {
    pub fn new(node: T) -> Self {
        Self { node }
    }
}
