pub mod client;
pub mod counts;
pub mod cursor;
pub mod fetcher;
pub mod paged;

pub use client::GitHubClient;
pub use counts::CountProbe;
pub use cursor::CursorListFetcher;
pub use fetcher::{page_count, RecordFetcher};
pub use paged::{PageFailure, PageReport, PagedListFetcher};
