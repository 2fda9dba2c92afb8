//! Read-only aggregates over the rental ledger.
//!
//! # Invariants
//! - Nothing here mutates the archive.
//! - Counts include closed and open rentals alike.
//! - `rental_counts` lists only titles still in the catalog. Pruning drops
//!   copies with no history, so every remaining title keeps its total; a
//!   title whose last copy is pruned had 0 rentals and leaves the map.

use crate::model::ids::ReaderId;
use crate::service::library_service::LibraryService;
use std::collections::BTreeMap;

impl LibraryService {
    /// Open rentals keyed by reader, rendered `"<copy id> <start date>"`.
    pub fn get_ongoing_rentals(&self) -> BTreeMap<ReaderId, String> {
        self.ledger
            .open_rentals()
            .map(|record| {
                (
                    record.reader_id,
                    format!("{} {}", record.copy_id, record.start),
                )
            })
            .collect()
    }

    /// Reader with the most rentals ever; ties go to the lowest reader ID.
    ///
    /// `None` until the first rental starts.
    pub fn find_book_worm(&self) -> Option<ReaderId> {
        let mut totals: BTreeMap<ReaderId, usize> = BTreeMap::new();
        for record in self.ledger.records() {
            *totals.entry(record.reader_id).or_default() += 1;
        }

        let mut best: Option<(ReaderId, usize)> = None;
        // Ascending key order plus a strict comparison keeps the lowest ID on ties.
        for (reader_id, total) in totals {
            if best.map_or(true, |(_, top)| total > top) {
                best = Some((reader_id, total));
            }
        }
        best.map(|(reader_id, _)| reader_id)
    }

    /// Total rentals per catalog title; titles never lent report 0.
    ///
    /// Titles removed from the catalog by `remove_books` are not listed.
    pub fn rental_counts(&self) -> BTreeMap<String, usize> {
        self.catalog
            .buckets()
            .map(|(title, bucket)| {
                let total: usize = bucket
                    .iter()
                    .map(|copy_id| self.ledger.rental_count(*copy_id))
                    .sum();
                (title.to_string(), total)
            })
            .collect()
    }
}
