//! GraphQL document and variables for the open-issues query.
//!
//! The issues connection is paged with `last: 5, after: $cursor`, so every
//! continuation page is older than the one before it and gets appended to the
//! issues already on screen.

use serde::Serialize;

use crate::models::RepositoryPath;

pub const GET_ORGANIZATION_ISSUES: &str = r#"
  query(
    $organization: String!,
    $repository: String!,
    $cursor: String
  ) {
    organization(login: $organization) {
      name
      url
      repository(name: $repository) {
        name
        url
        issues(last: 5, after: $cursor, states: [OPEN]) {
          edges {
            node {
              id
              title
              url
              reactions(last: 3) {
                edges {
                  node {
                    id
                    content
                  }
                }
              }
            }
          }
          totalCount
          pageInfo {
            endCursor
            hasNextPage
          }
        }
      }
    }
  }
"#;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct IssuesQueryVariables {
    pub organization: String,
    pub repository: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Build the query document and its variables for one page of issues.
pub fn build_query(path: &RepositoryPath, cursor: Option<&str>) -> (&'static str, IssuesQueryVariables) {
    let variables = IssuesQueryVariables {
        organization: path.organization().to_string(),
        repository: path.repository().to_string(),
        cursor: cursor.map(str::to_string),
    };

    (GET_ORGANIZATION_ISSUES, variables)
}
