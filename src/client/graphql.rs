use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Transport;
use crate::constants::{GITHUB_GRAPHQL_URL, USER_AGENT as AGENT};
use crate::error::{IssuesError, IssuesResult};
use crate::logging::{log_debug, log_error};
use crate::models::graphql::{GraphQLResponse, IssuesResponse};
use crate::query::IssuesQueryVariables;

/// GraphQL client for the GitHub API authenticated with a bearer token
pub struct GraphQLClient {
    client: Client,
    api_url: String,
}

impl GraphQLClient {
    pub fn new(token: &str) -> IssuesResult<Self> {
        Self::with_api_url(token, GITHUB_GRAPHQL_URL)
    }

    pub fn with_api_url(token: &str, api_url: &str) -> IssuesResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(AGENT));
        let mut auth = HeaderValue::from_str(&format!("bearer {}", token))
            .map_err(|_| IssuesError::ConfigError("Token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: api_url.to_string(),
        })
    }

    /// Execute a raw GraphQL request and decode the envelope.
    ///
    /// The `errors` array is left in the returned envelope for the caller.
    pub async fn execute<V, T>(&self, query: &str, variables: &V) -> IssuesResult<GraphQLResponse<T>>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let request_body = GraphQLRequest { query, variables };

        log_debug(&format!("POST {}", self.api_url));

        let response = self.client.post(&self.api_url).json(&request_body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            log_error(&format!("GraphQL request failed with status {}", status));
            return Err(IssuesError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Transport for GraphQLClient {
    async fn post(&self, query: &str, variables: &IssuesQueryVariables) -> IssuesResult<IssuesResponse> {
        self.execute(query, variables).await
    }
}

#[derive(Debug, Serialize)]
struct GraphQLRequest<'a, V> {
    query: &'a str,
    variables: &'a V,
}
