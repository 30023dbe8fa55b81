use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{GraphQlRequest, GraphQlResponse, IssueItem, Record};

pub struct GitHubClient {
    client: Client,
    api_url: String,
    graphql_url: String,
}

impl GitHubClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut authorization =
            header::HeaderValue::from_str(&format!("token {}", config.github_token))
                .map_err(|_| {
                    Error::Config(
                        "Token contains characters not allowed in an HTTP header \
                         (the token file is sent verbatim, including trailing newlines)"
                            .to_string(),
                    )
                })?;
        authorization.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("ghtitles/0.1"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            graphql_url: config.graphql_url.clone(),
        })
    }

    /// Fetches one page of the issues listing (`state=all`, which also
    /// includes pull requests).
    pub async fn list_issues_page(
        &self,
        owner: &str,
        repo: &str,
        page: u64,
        per_page: u32,
    ) -> Result<Vec<Record>> {
        let url = format!("{}/repos/{}/{}/issues", self.api_url, owner, repo);
        tracing::debug!("Fetching: {} page {}", url, page);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("state", "all".to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::RepoNotFound(format!("{}/{}", owner, repo)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "Failed to fetch issues page {} of {}/{}: {} - {}",
                page, owner, repo, status, body
            )));
        }

        let items: Vec<IssueItem> = response.json().await?;
        let pull_requests = items.iter().filter(|item| item.is_pull_request()).count();
        tracing::debug!(
            "Issues page {} of {}/{}: {} items, {} pull requests",
            page,
            owner,
            repo,
            items.len(),
            pull_requests
        );
        Ok(items.into_iter().map(Record::from).collect())
    }

    /// Runs a GraphQL query and returns its `data`. Any entry in the
    /// response's `errors` array fails the call.
    pub async fn graphql<V, T>(&self, query: &str, variables: V) -> Result<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.graphql_url)
            .json(&GraphQlRequest { query, variables })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::GitHubApi(format!(
                "GraphQL request failed: {} - {}",
                status, body
            )));
        }

        let body: GraphQlResponse<T> = response.json().await?;

        if !body.errors.is_empty() {
            let messages: Vec<_> = body.errors.into_iter().map(|e| e.message).collect();
            return Err(Error::GraphQl(messages.join("; ")));
        }

        body.data
            .ok_or_else(|| Error::GraphQl("Response contained no data".to_string()))
    }
}
