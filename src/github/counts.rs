use std::sync::Arc;

use serde_json::json;

use crate::error::{Error, Result};
use crate::github::GitHubClient;
use crate::models::{RepoCounts, RepositoryCounts, RepositoryData};

const COUNTS_QUERY: &str = r#"
query($owner: String!, $name: String!) {
  repository(owner: $owner, name: $name) {
    issues { totalCount }
    pullRequests { totalCount }
    discussions { totalCount }
  }
}
"#;

/// Reads the issue, pull request and discussion totals in one query.
pub struct CountProbe {
    github: Arc<GitHubClient>,
}

impl CountProbe {
    pub fn new(github: Arc<GitHubClient>) -> Self {
        Self { github }
    }

    pub async fn fetch(&self, owner: &str, repo: &str) -> Result<RepoCounts> {
        tracing::info!("Counting items in {}/{}", owner, repo);

        let result = self.query(owner, repo).await;
        match result {
            Ok(counts) => {
                tracing::info!(
                    "{}/{}: {} issues, {} pull requests, {} discussions",
                    owner,
                    repo,
                    counts.issues,
                    counts.pull_requests,
                    counts.discussions
                );
                Ok(counts)
            }
            Err(e) => {
                tracing::error!("Count query for {}/{} failed: {}", owner, repo, e);
                Err(Error::CountProbe {
                    repo: format!("{}/{}", owner, repo),
                    source: Box::new(e),
                })
            }
        }
    }

    async fn query(&self, owner: &str, repo: &str) -> Result<RepoCounts> {
        let data: RepositoryData<RepositoryCounts> = self
            .github
            .graphql(COUNTS_QUERY, json!({ "owner": owner, "name": repo }))
            .await?;

        data.repository
            .map(RepoCounts::from)
            .ok_or_else(|| Error::RepoNotFound(format!("{}/{}", owner, repo)))
    }
}
