use serde::{Deserialize, Serialize};
use std::fmt;

/// One exported item: its number and title as the provider returned them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub number: u64,
    pub title: String,
}

impl Record {
    pub fn new(number: u64, title: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
        }
    }
}

/// Renders `<number>,<title>` with no escaping. Titles containing commas or
/// newlines produce ambiguous lines.
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.number, self.title)
    }
}

/// Issues and pull requests share one REST listing and are exported as
/// `Issue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Issue,
    Discussion,
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Issue => write!(f, "issues"),
            ItemType::Discussion => write!(f, "discussions"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RepoCounts {
    pub issues: u64,
    pub pull_requests: u64,
    pub discussions: u64,
}

impl RepoCounts {
    pub fn issues_and_pull_requests(&self) -> u64 {
        self.issues + self.pull_requests
    }
}
