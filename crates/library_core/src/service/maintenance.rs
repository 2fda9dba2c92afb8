//! Archive maintenance: pruning copies that were never lent.
//!
//! # Invariants
//! - A copy with at least one rental record, open or closed, is kept.
//! - Pruned copies leave the registry, their title bucket and the ledger
//!   together; titles left without copies disappear from the catalog.
//! - Pruning twice in a row changes nothing the second time.

use crate::model::ids::CopyId;
use crate::service::library_service::LibraryService;
use log::info;

/// What one `remove_books` pass deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaintenanceReport {
    /// Removed copy IDs, ascending.
    pub removed_copies: Vec<CopyId>,
    /// Titles whose last copy was removed, alphabetical.
    pub removed_titles: Vec<String>,
}

impl MaintenanceReport {
    pub fn is_empty(&self) -> bool {
        self.removed_copies.is_empty()
    }
}

impl LibraryService {
    /// Deletes every copy whose rental history is empty.
    pub fn remove_books(&mut self) -> MaintenanceReport {
        let idle: Vec<CopyId> = self.ledger.never_rented().collect();
        let mut report = MaintenanceReport::default();

        for copy_id in idle {
            self.ledger.remove_entry(copy_id);
            let Some(copy) = self.catalog.remove(copy_id) else {
                continue;
            };
            if !self.catalog.contains_title(&copy.title) {
                report.removed_titles.push(copy.title);
            }
            report.removed_copies.push(copy_id);
        }
        report.removed_titles.sort();

        info!(
            "event=archive_prune module=maintenance status=ok copies_removed={} titles_removed={}",
            report.removed_copies.len(),
            report.removed_titles.len()
        );
        report
    }
}
