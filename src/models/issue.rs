use serde::Deserialize;

use crate::models::Record;

/// An entry of the REST issues listing. Pull requests appear in the same
/// listing with `pull_request` set.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueItem {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl IssueItem {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl From<IssueItem> for Record {
    fn from(item: IssueItem) -> Self {
        Record::new(item.number, item.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_requests_share_the_listing() {
        let items: Vec<IssueItem> = serde_json::from_str(
            r#"[
                {"number": 2, "title": "Add CI", "pull_request": {"url": "https://api.github.com/repos/o/r/pulls/2"}},
                {"number": 1, "title": "Docs are wrong"}
            ]"#,
        )
        .unwrap();

        assert!(items[0].is_pull_request());
        assert!(!items[1].is_pull_request());

        let records: Vec<Record> = items.into_iter().map(Record::from).collect();
        assert_eq!(records[0], Record::new(2, "Add CI"));
    }
}
