use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::client::Transport;
use crate::error::IssuesResult;
use crate::logging::{log_debug, log_error, log_info};
use crate::models::RepositoryPath;
use crate::query::build_query;

use super::ApplicationState;

/// How a completed fetch affected the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// An initial fetch replaced the loaded organization.
    Reset,
    /// A continuation page was appended.
    Merged,
    /// The response was superseded by a newer fetch and dropped.
    Stale,
}

/// Owns the [`ApplicationState`] and the transport used to fill it.
///
/// Both operations take `&self` and may overlap. Every initial fetch starts a
/// new generation; a response is applied only if no newer initial fetch was
/// issued meanwhile and, for continuations, only if the state still ends at
/// the cursor the request was issued with. Anything else is reported as
/// [`FetchOutcome::Stale`] and leaves the state untouched.
pub struct IssuesController<T> {
    transport: T,
    state: Mutex<ApplicationState>,
    generation: AtomicU64,
}

impl<T: Transport> IssuesController<T> {
    pub fn new(transport: T, path: RepositoryPath) -> Self {
        Self {
            transport,
            state: Mutex::new(ApplicationState::new(path)),
            generation: AtomicU64::new(0),
        }
    }

    /// Snapshot of the current state for rendering.
    pub async fn state(&self) -> ApplicationState {
        self.state.lock().await.clone()
    }

    pub async fn has_more(&self) -> bool {
        self.state.lock().await.has_more()
    }

    /// Fetch the first page for `path`, replacing whatever was loaded.
    pub async fn fetch_initial(&self, path: &str) -> IssuesResult<FetchOutcome> {
        let path = RepositoryPath::parse(path)?;
        self.fetch_initial_path(path).await
    }

    pub async fn fetch_initial_path(&self, path: RepositoryPath) -> IssuesResult<FetchOutcome> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        log_info(&format!("Fetching open issues for {} (generation {})", path, generation));

        let (query, variables) = build_query(&path, None);
        let response = self.transport.post(query, &variables).await.map_err(|e| {
            log_error(&format!("Initial fetch for {} failed: {}", path, e));
            e
        })?;

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation {
            log_debug(&format!("Dropping superseded response for {}", path));
            return Ok(FetchOutcome::Stale);
        }

        state.reset(path, response);
        log_state("Reset", &state);
        Ok(FetchOutcome::Reset)
    }

    /// Fetch the page after the current end cursor and append it.
    pub async fn fetch_more(&self) -> IssuesResult<FetchOutcome> {
        let (path, cursor, generation) = {
            let state = self.state.lock().await;
            let cursor = state.next_cursor()?;
            (state.path.clone(), cursor, self.generation.load(Ordering::SeqCst))
        };
        log_info(&format!("Fetching more issues for {} after {}", path, cursor));

        let (query, variables) = build_query(&path, Some(&cursor));
        let response = self.transport.post(query, &variables).await.map_err(|e| {
            log_error(&format!("Fetch more for {} failed: {}", path, e));
            e
        })?;

        let mut state = self.state.lock().await;
        if self.generation.load(Ordering::SeqCst) != generation
            || state.end_cursor() != Some(cursor.as_str())
        {
            log_debug(&format!("Dropping stale page after cursor {}", cursor));
            return Ok(FetchOutcome::Stale);
        }

        state.merge(response);
        log_state("Merged", &state);
        Ok(FetchOutcome::Merged)
    }
}

fn log_state(action: &str, state: &ApplicationState) {
    match (&state.errors, state.issues()) {
        (Some(errors), _) => log_error(&format!("{} with GraphQL errors: {}", action, errors.join(", "))),
        (None, Some(issues)) => log_debug(&format!(
            "{}: {} of {} issues loaded, has next page: {}",
            action,
            issues.edges.len(),
            issues.total_count,
            issues.page_info.has_next_page
        )),
        (None, None) => log_debug(&format!("{}: no repository in response", action)),
    }
}
