use std::sync::Arc;

use async_trait::async_trait;

use crate::error::IssuesResult;
use crate::models::graphql::IssuesResponse;
use crate::query::IssuesQueryVariables;

/// Sends one issues query and decodes the response envelope.
///
/// An `Err` means the request never produced a GraphQL response (network
/// failure, non-2xx status, undecodable body). GraphQL-level errors come back
/// inside `Ok` in [`IssuesResponse::errors`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, query: &str, variables: &IssuesQueryVariables) -> IssuesResult<IssuesResponse>;
}

#[async_trait]
impl<T> Transport for Arc<T>
where
    T: Transport + ?Sized,
{
    async fn post(&self, query: &str, variables: &IssuesQueryVariables) -> IssuesResult<IssuesResponse> {
        (**self).post(query, variables).await
    }
}
