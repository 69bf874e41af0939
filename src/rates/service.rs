use std::sync::Arc;

use arc_swap::ArcSwapOption;
use tracing::info;

use crate::rates::table::RateTable;

/// Holder of the latest rate snapshot.
///
/// Readers take a cheap atomic snapshot; the updater swaps in a fresh
/// table after each successful fetch. `None` until the first fetch
/// succeeds: that is the "rates not ready" state, and estimates decline
/// rather than proceed.
#[derive(Default)]
pub struct RateService {
    current: ArcSwapOption<RateTable>,
}

impl RateService {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::const_empty(),
        }
    }

    /// Latest snapshot, if any fetch has succeeded yet.
    pub fn snapshot(&self) -> Option<Arc<RateTable>> {
        self.current.load_full()
    }

    pub fn is_ready(&self) -> bool {
        self.current.load().is_some()
    }

    /// Replace the snapshot with a freshly fetched table.
    pub fn store(&self, table: RateTable) {
        info!("Rate snapshot updated (as of {})", table.as_of);
        self.current.store(Some(Arc::new(table)));
    }
}
