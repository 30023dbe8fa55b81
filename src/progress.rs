use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::models::ItemType;

/// Single-line `page X/Y` tickers, one per item-type group, redrawn in place
/// on stderr.
#[derive(Clone)]
pub struct Progress {
    multi: MultiProgress,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
        }
    }

    pub fn hidden() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
        }
    }

    pub fn ticker(&self, item_type: ItemType, total_pages: u64) -> PageTicker {
        let style = ProgressStyle::with_template("{prefix:>12} page {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = self.multi.add(ProgressBar::new(total_pages));
        bar.set_style(style);
        bar.set_prefix(item_type.to_string());
        PageTicker { bar }
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

pub struct PageTicker {
    bar: ProgressBar,
}

impl PageTicker {
    /// Marks `page` as dispatched. Raises the total if the page lies beyond
    /// the current estimate.
    pub fn page(&self, page: u64) {
        if self.bar.length().is_some_and(|len| page > len) {
            self.bar.set_length(page);
        }
        self.bar.set_position(page);
    }

    pub fn finish(&self) {
        self.bar.finish();
    }
}
