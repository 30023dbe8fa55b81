use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::github::fetcher::{page_count, RecordFetcher};
use crate::github::GitHubClient;
use crate::models::{ItemType, Record, RepositoryData, RepositoryItems};
use crate::progress::Progress;

/// Fetches a GraphQL connection page by page, following `endCursor` until
/// the provider reports no next page.
///
/// Pages are strictly sequential and a failed page fails the whole fetch:
/// no partial results are returned.
pub struct CursorListFetcher {
    github: Arc<GitHubClient>,
    item_type: ItemType,
    config: ExportConfig,
    progress: Progress,
}

impl CursorListFetcher {
    pub fn new(
        github: Arc<GitHubClient>,
        item_type: ItemType,
        config: ExportConfig,
        progress: Progress,
    ) -> Self {
        Self {
            github,
            item_type,
            config,
            progress,
        }
    }

    pub fn discussions(github: Arc<GitHubClient>, config: ExportConfig, progress: Progress) -> Self {
        Self::new(github, ItemType::Discussion, config, progress)
    }

    fn query(&self) -> String {
        let connection = match self.item_type {
            ItemType::Issue => "issues",
            ItemType::Discussion => "discussions",
        };

        format!(
            r#"
query($owner: String!, $name: String!, $first: Int!, $after: String) {{
  repository(owner: $owner, name: $name) {{
    items: {connection}(first: $first, after: $after) {{
      pageInfo {{ hasNextPage endCursor }}
      nodes {{ number title }}
    }}
  }}
}}
"#
        )
    }
}

#[async_trait]
impl RecordFetcher for CursorListFetcher {
    async fn fetch(&self, owner: &str, repo: &str, total_item_count: u64) -> Result<Vec<Record>> {
        let page_size = self.config.page_size;
        // Only an estimate for the ticker; the loop ends on hasNextPage.
        let estimated_pages = page_count(total_item_count, page_size).max(1);
        tracing::info!(
            "Fetching about {} {} from {}/{}",
            total_item_count,
            self.item_type,
            owner,
            repo
        );

        let query = self.query();
        let ticker = self.progress.ticker(self.item_type, estimated_pages);
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;
        let mut has_next_page = true;
        let mut page = 0;

        while has_next_page {
            page += 1;
            ticker.page(page);

            let variables = json!({
                "owner": owner,
                "name": repo,
                "first": page_size.get(),
                "after": cursor,
            });
            let data: RepositoryData<RepositoryItems> =
                self.github.graphql(&query, variables).await?;

            let connection = data
                .repository
                .ok_or_else(|| Error::RepoNotFound(format!("{}/{}", owner, repo)))?
                .items;

            records.extend(connection.nodes.into_iter().map(Record::from));
            has_next_page = connection.page_info.has_next_page;
            cursor = connection.page_info.end_cursor;

            if has_next_page && cursor.is_none() {
                return Err(Error::GraphQl(format!(
                    "{} page {} reported a next page without an end cursor",
                    self.item_type, page
                )));
            }
        }

        ticker.finish();
        tracing::debug!("Fetched {} {} in {} pages", records.len(), self.item_type, page);

        Ok(records)
    }

    fn item_type(&self) -> ItemType {
        self.item_type
    }
}
