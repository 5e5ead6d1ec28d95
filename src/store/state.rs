use serde::Serialize;

use crate::error::IssuesResult;
use crate::issues_error;
use crate::models::graphql::IssuesResponse;
use crate::models::{IssueConnection, Organization, PageInfo, Repository, RepositoryPath};

/// Everything the UI needs to render: the requested path, the loaded
/// organization (if any) and the GraphQL errors of the latest response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicationState {
    pub path: RepositoryPath,
    pub organization: Option<Organization>,
    pub errors: Option<Vec<String>>,
}

impl ApplicationState {
    pub fn new(path: RepositoryPath) -> Self {
        Self {
            path,
            organization: None,
            errors: None,
        }
    }

    pub fn repository(&self) -> Option<&Repository> {
        self.organization.as_ref()?.repository.as_ref()
    }

    pub fn issues(&self) -> Option<&IssueConnection> {
        self.repository().map(|repository| &repository.issues)
    }

    pub fn page_info(&self) -> Option<&PageInfo> {
        self.issues().map(|issues| &issues.page_info)
    }

    pub fn end_cursor(&self) -> Option<&str> {
        self.page_info()?.end_cursor.as_deref()
    }

    /// Whether a continuation page can be requested.
    pub fn has_more(&self) -> bool {
        self.page_info()
            .map(|page| page.has_next_page && page.end_cursor.is_some())
            .unwrap_or(false)
    }

    /// Cursor for the next continuation page.
    pub fn next_cursor(&self) -> IssuesResult<String> {
        if self.organization.is_none() {
            return Err(issues_error!(Precondition, "no organization loaded"));
        }
        let page = self
            .page_info()
            .ok_or_else(|| issues_error!(Precondition, "no repository loaded for {}", self.path))?;
        if !page.has_next_page {
            return Err(issues_error!(Precondition, "no next page"));
        }
        let cursor = page.end_cursor.clone();
        cursor.ok_or_else(|| issues_error!(Precondition, "missing end cursor"))
    }

    /// Replace the organization and errors wholesale with an initial page.
    pub fn reset(&mut self, path: RepositoryPath, response: IssuesResponse) {
        self.errors = response.error_messages();
        self.organization = response.data.and_then(|data| data.organization);
        self.path = path;
    }

    /// Fold a continuation page into the loaded one.
    ///
    /// Loaded edges stay first and the new page's edges follow; everything
    /// else (names, urls, `totalCount`, `pageInfo`, errors) comes from the new
    /// response. If either side lacks a repository the response is adopted
    /// as-is.
    pub fn merge(&mut self, response: IssuesResponse) {
        self.errors = response.error_messages();
        let incoming = response.data.and_then(|data| data.organization);

        self.organization = match (self.organization.take(), incoming) {
            (Some(previous), Some(mut next)) => {
                if let (Some(loaded), Some(fetched)) = (previous.repository, next.repository.as_mut()) {
                    let mut edges = loaded.issues.edges;
                    edges.append(&mut fetched.issues.edges);
                    fetched.issues.edges = edges;
                }
                Some(next)
            }
            (_, next) => next,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssuesError;
    use crate::tests::fixtures::{issue_ids, page, repository_path};
    use crate::models::graphql::{GraphQLError, OrganizationData};
    use crate::models::GraphQLResponse;

    fn loaded_state() -> ApplicationState {
        let mut state = ApplicationState::new(repository_path("o/r"));
        state.reset(repository_path("o/r"), page(&[1, 2], 10, Some("c1"), true));
        state
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = ApplicationState::new(repository_path("o/r"));
        assert!(state.organization.is_none());
        assert!(state.errors.is_none());
        assert!(!state.has_more());
    }

    #[test]
    fn test_reset_discards_previous_organization() {
        let mut state = loaded_state();
        state.reset(repository_path("x/y"), page(&[7], 1, Some("z"), false));

        assert_eq!(state.path.to_string(), "x/y");
        assert_eq!(issue_ids(&state), vec!["I_7"]);
        assert_eq!(state.issues().unwrap().total_count, 1);
        assert!(!state.has_more());
    }

    #[test]
    fn test_merge_appends_edges_and_replaces_page_info() {
        let mut state = loaded_state();
        state.merge(page(&[3, 4], 12, Some("c2"), false));

        assert_eq!(issue_ids(&state), vec!["I_1", "I_2", "I_3", "I_4"]);
        let issues = state.issues().unwrap();
        assert_eq!(issues.total_count, 12);
        assert_eq!(
            issues.page_info,
            PageInfo {
                end_cursor: Some("c2".to_string()),
                has_next_page: false,
            }
        );
    }

    #[test]
    fn test_merge_keeps_duplicate_edges() {
        let mut state = loaded_state();
        state.merge(page(&[2, 3], 10, Some("c2"), true));
        assert_eq!(issue_ids(&state), vec!["I_1", "I_2", "I_2", "I_3"]);
    }

    #[test]
    fn test_merge_takes_new_names() {
        let mut state = loaded_state();
        let mut response = page(&[3], 10, Some("c2"), true);
        let organization = response.data.as_mut().unwrap().organization.as_mut().unwrap();
        organization.name = Some("Renamed".to_string());
        organization.repository.as_mut().unwrap().url = "https://github.com/o/renamed".to_string();

        state.merge(response);

        let organization = state.organization.as_ref().unwrap();
        assert_eq!(organization.name.as_deref(), Some("Renamed"));
        assert_eq!(state.repository().unwrap().url, "https://github.com/o/renamed");
        assert_eq!(issue_ids(&state), vec!["I_1", "I_2", "I_3"]);
    }

    #[test]
    fn test_merge_with_errors_and_null_organization() {
        let mut state = loaded_state();
        state.merge(GraphQLResponse {
            data: Some(OrganizationData { organization: None }),
            errors: Some(vec![GraphQLError::new("Something broke")]),
        });

        assert_eq!(state.errors, Some(vec!["Something broke".to_string()]));
        assert!(state.organization.is_none());
    }

    #[test]
    fn test_merge_without_repository_adopts_response() {
        let mut state = loaded_state();
        let mut response = page(&[3], 10, None, false);
        response.data.as_mut().unwrap().organization.as_mut().unwrap().repository = None;

        state.merge(response);

        assert!(state.organization.is_some());
        assert!(state.repository().is_none());
    }

    #[test]
    fn test_successful_merge_clears_errors() {
        let mut state = loaded_state();
        state.errors = Some(vec!["stale".to_string()]);
        state.merge(page(&[3], 10, Some("c2"), true));
        assert!(state.errors.is_none());
    }

    #[test]
    fn test_next_cursor_preconditions() {
        let empty = ApplicationState::new(repository_path("o/r"));
        assert!(matches!(empty.next_cursor(), Err(IssuesError::Precondition(_))));

        let mut last_page = loaded_state();
        last_page.merge(page(&[3], 3, Some("c2"), false));
        assert!(matches!(last_page.next_cursor(), Err(IssuesError::Precondition(_))));

        let mut no_cursor = loaded_state();
        no_cursor.merge(page(&[], 2, None, true));
        assert!(matches!(no_cursor.next_cursor(), Err(IssuesError::Precondition(_))));
        assert!(!no_cursor.has_more());

        assert_eq!(loaded_state().next_cursor().unwrap(), "c1");
    }

    #[test]
    fn test_next_cursor_requires_repository() {
        let mut state = ApplicationState::new(repository_path("o/r"));
        let mut response = page(&[], 0, Some("c1"), true);
        response.data.as_mut().unwrap().organization.as_mut().unwrap().repository = None;
        state.reset(repository_path("o/r"), response);

        assert!(state.organization.is_some());
        assert!(!state.has_more());
        match state.next_cursor() {
            Err(IssuesError::Precondition(msg)) => assert!(msg.contains("no repository")),
            other => panic!("Expected Precondition, got {:?}", other),
        }
    }
}
