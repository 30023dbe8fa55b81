use std::num::NonZeroU32;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{ItemType, Record};

/// A source of records for one item-type group.
///
/// `total_item_count` is the count reported by the count probe; how far it
/// bounds the fetch is up to the implementation.
#[async_trait]
pub trait RecordFetcher: Send + Sync {
    async fn fetch(&self, owner: &str, repo: &str, total_item_count: u64) -> Result<Vec<Record>>;
    fn item_type(&self) -> ItemType;
}

/// Number of pages of `page_size` needed to hold `total_item_count` items.
pub fn page_count(total_item_count: u64, page_size: NonZeroU32) -> u64 {
    total_item_count.div_ceil(u64::from(page_size.get()))
}
