use std::sync::Arc;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::github::{CountProbe, CursorListFetcher, GitHubClient, PagedListFetcher, RecordFetcher};
use crate::output::RecordSink;
use crate::progress::Progress;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub record_count: usize,
    pub written_to: String,
    pub issue_records: usize,
    pub discussion_records: usize,
    pub failed_pages: usize,
}

/// Exports every issue, pull request and discussion of a repository:
/// counts first, then the REST issue pages and the GraphQL discussion pages
/// side by side, then issues followed by discussions into the sink.
pub struct Exporter {
    count_probe: CountProbe,
    issues: PagedListFetcher,
    discussions: CursorListFetcher,
}

impl Exporter {
    pub fn new(github: GitHubClient, config: ExportConfig, progress: Progress) -> Self {
        let github = Arc::new(github);
        Self {
            count_probe: CountProbe::new(github.clone()),
            issues: PagedListFetcher::new(github.clone(), config.clone(), progress.clone()),
            discussions: CursorListFetcher::discussions(github, config, progress),
        }
    }

    pub async fn run(
        &self,
        owner: &str,
        repo: &str,
        sink: &mut dyn RecordSink,
    ) -> Result<ExportResult> {
        // Step 1: Count, aborting the run if the counts are unavailable
        let counts = self.count_probe.fetch(owner, repo).await?;
        let total_issues_and_prs = counts.issues_and_pull_requests();

        // Step 2: Fetch both groups concurrently
        let (issue_report, discussions) = tokio::join!(
            self.issues.fetch_report(owner, repo, total_issues_and_prs),
            self.discussions.fetch(owner, repo, counts.discussions),
        );
        let discussions = discussions?;

        let failed_pages = issue_report.failures.len();
        if failed_pages > 0 {
            tracing::warn!(
                "{} of {} issue pages failed; output is missing their records",
                failed_pages,
                issue_report.pages_requested
            );
        }

        // Step 3: Issues and pull requests first, then discussions
        let issue_records = issue_report.records.len();
        let discussion_records = discussions.len();
        let mut records = issue_report.records;
        records.extend(discussions);

        // Step 4: Write
        let record_count = sink.write_records(&records)?;
        tracing::info!(
            "Exported {} {} and {} {} from {}/{}",
            issue_records,
            self.issues.item_type(),
            discussion_records,
            self.discussions.item_type(),
            owner,
            repo
        );

        Ok(ExportResult {
            record_count,
            written_to: sink.describe(),
            issue_records,
            discussion_records,
            failed_pages,
        })
    }
}
