use serde::{Deserialize, Serialize};

use crate::models::{Record, RepoCounts};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a, V> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// `data` of any query rooted at `repository(owner:, name:)`.
#[derive(Debug, Deserialize)]
pub struct RepositoryData<T> {
    pub repository: Option<T>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryCounts {
    pub issues: TotalCount,
    pub pull_requests: TotalCount,
    pub discussions: TotalCount,
}

impl From<RepositoryCounts> for RepoCounts {
    fn from(counts: RepositoryCounts) -> Self {
        Self {
            issues: counts.issues.total_count,
            pull_requests: counts.pull_requests.total_count,
            discussions: counts.discussions.total_count,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    pub page_info: PageInfo,
    pub nodes: Vec<T>,
}

/// A repository connection queried under the `items` alias, so the same
/// decoding serves any item type.
#[derive(Debug, Deserialize)]
pub struct RepositoryItems {
    pub items: Connection<ItemNode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ItemNode {
    pub number: u64,
    pub title: String,
}

impl From<ItemNode> for Record {
    fn from(node: ItemNode) -> Self {
        Record::new(node.number, node.title)
    }
}
