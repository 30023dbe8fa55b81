use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;

use crate::config::ExportConfig;
use crate::error::{Error, Result};
use crate::github::fetcher::{page_count, RecordFetcher};
use crate::github::GitHubClient;
use crate::models::{ItemType, Record};
use crate::progress::Progress;

#[derive(Debug)]
pub struct PageFailure {
    pub page: u64,
    pub error: Error,
}

/// Outcome of a numbered-page fetch: records from every page that succeeded
/// and the pages that did not.
#[derive(Debug, Default)]
pub struct PageReport {
    pub pages_requested: u64,
    pub records: Vec<Record>,
    pub failures: Vec<PageFailure>,
}

impl PageReport {
    /// Folds per-page outcomes in the order given. A failed page adds no
    /// records.
    pub fn from_outcomes(outcomes: Vec<(u64, Result<Vec<Record>>)>) -> Self {
        let mut report = PageReport {
            pages_requested: outcomes.len() as u64,
            ..Default::default()
        };

        for (page, outcome) in outcomes {
            match outcome {
                Ok(records) => report.records.extend(records),
                Err(error) => report.failures.push(PageFailure { page, error }),
            }
        }

        report
    }
}

/// Fetches the issues listing (issues and pull requests) by requesting
/// every page at once.
///
/// There is no concurrency cap: a repository with N pages gets N requests
/// in flight together.
pub struct PagedListFetcher {
    github: Arc<GitHubClient>,
    config: ExportConfig,
    progress: Progress,
}

impl PagedListFetcher {
    pub fn new(github: Arc<GitHubClient>, config: ExportConfig, progress: Progress) -> Self {
        Self {
            github,
            config,
            progress,
        }
    }

    pub async fn fetch_report(&self, owner: &str, repo: &str, total_item_count: u64) -> PageReport {
        let page_size = self.config.page_size;
        let total_pages = page_count(total_item_count, page_size);
        tracing::info!(
            "Fetching {} issues and pull requests from {}/{} in {} pages",
            total_item_count,
            owner,
            repo,
            total_pages
        );

        let ticker = self.progress.ticker(ItemType::Issue, total_pages);
        let ticker = &ticker;
        let github = &self.github;

        let requests = (1..=total_pages).map(move |page| async move {
            ticker.page(page);
            let outcome = github.list_issues_page(owner, repo, page, page_size.get()).await;
            (page, outcome)
        });

        let outcomes = join_all(requests).await;
        ticker.finish();

        let report = PageReport::from_outcomes(outcomes);
        for failure in &report.failures {
            tracing::error!(
                "Failed to fetch issues page {}/{} of {}/{}: {}",
                failure.page,
                total_pages,
                owner,
                repo,
                failure.error
            );
        }

        report
    }
}

#[async_trait]
impl RecordFetcher for PagedListFetcher {
    /// Never fails: failed pages are logged and skipped.
    async fn fetch(&self, owner: &str, repo: &str, total_item_count: u64) -> Result<Vec<Record>> {
        Ok(self.fetch_report(owner, repo, total_item_count).await.records)
    }

    fn item_type(&self) -> ItemType {
        ItemType::Issue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;
    use std::num::NonZeroU32;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer, page_size: u32) -> PagedListFetcher {
        let config = Config::new("secret").with_base_url(&server.uri());
        PagedListFetcher::new(
            Arc::new(GitHubClient::new(&config).unwrap()),
            ExportConfig {
                page_size: NonZeroU32::new(page_size).unwrap(),
            },
            Progress::hidden(),
        )
    }

    fn issues(numbers: std::ops::RangeInclusive<u64>) -> serde_json::Value {
        json!(numbers
            .map(|n| json!({"number": n, "title": format!("Issue {n}")}))
            .collect::<Vec<_>>())
    }

    async fn mount_page(server: &MockServer, page: u64, template: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path("/repos/octo/repo/issues"))
            .and(query_param("page", page.to_string()))
            .respond_with(template)
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_one_request_per_page() {
        let server = MockServer::start().await;
        mount_page(&server, 1, ResponseTemplate::new(200).set_body_json(issues(1..=3))).await;
        mount_page(&server, 2, ResponseTemplate::new(200).set_body_json(issues(4..=6))).await;
        mount_page(&server, 3, ResponseTemplate::new(200).set_body_json(issues(7..=7))).await;

        let report = fetcher_for(&server, 3).fetch_report("octo", "repo", 7).await;

        assert_eq!(report.pages_requested, 3);
        assert!(report.failures.is_empty());
        let numbers: Vec<_> = report.records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[tokio::test]
    async fn test_zero_items_sends_no_requests() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let records = fetcher_for(&server, 100).fetch("octo", "repo", 0).await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_failed_page_is_skipped() {
        let server = MockServer::start().await;
        mount_page(&server, 1, ResponseTemplate::new(200).set_body_json(issues(1..=2))).await;
        mount_page(&server, 2, ResponseTemplate::new(500).set_body_string("boom")).await;
        mount_page(&server, 3, ResponseTemplate::new(200).set_body_json(issues(5..=6))).await;

        let report = fetcher_for(&server, 2).fetch_report("octo", "repo", 6).await;

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].page, 2);
        assert!(matches!(report.failures[0].error, Error::GitHubApi(_)));
        let numbers: Vec<_> = report.records.iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![1, 2, 5, 6]);
    }

    #[test]
    fn test_report_from_outcomes() {
        let outcomes = vec![
            (1, Ok(vec![Record::new(1, "a")])),
            (2, Err(Error::GitHubApi("down".to_string()))),
            (3, Ok(vec![Record::new(3, "c"), Record::new(4, "d")])),
        ];

        let report = PageReport::from_outcomes(outcomes);
        assert_eq!(report.pages_requested, 3);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.failures.len(), 1);
    }
}
