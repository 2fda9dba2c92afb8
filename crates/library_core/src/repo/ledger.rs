//! Per-copy rental history.
//!
//! # Responsibility
//! - Keep every rental ever opened, grouped by copy, in opening order.
//! - Answer "is there an open rental" without scanning other copies.
//!
//! # Invariants
//! - One entry per registered copy, created empty at registration.
//! - At most one open record per copy.
//! - Records are appended and closed, never rewritten or dropped while
//!   their copy is registered.

use crate::model::ids::CopyId;
use crate::model::rental::{RentalDate, RentalRecord};
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct RentalLedger {
    entries: BTreeMap<CopyId, Vec<RentalRecord>>,
}

impl RentalLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty history for a newly registered copy.
    pub fn open_entry(&mut self, copy_id: CopyId) {
        self.entries.entry(copy_id).or_default();
    }

    /// Drops a copy's entry entirely, returning the history it held.
    pub fn remove_entry(&mut self, copy_id: CopyId) -> Option<Vec<RentalRecord>> {
        self.entries.remove(&copy_id)
    }

    /// Ordered history of one copy, `None` when the copy has no entry.
    pub fn history(&self, copy_id: CopyId) -> Option<&[RentalRecord]> {
        self.entries.get(&copy_id).map(Vec::as_slice)
    }

    /// Number of rentals ever opened for one copy (0 for unknown copies).
    pub fn rental_count(&self, copy_id: CopyId) -> usize {
        self.entries.get(&copy_id).map_or(0, Vec::len)
    }

    pub fn open_rental(&self, copy_id: CopyId) -> Option<&RentalRecord> {
        self.entries
            .get(&copy_id)?
            .iter()
            .find(|record| record.is_open())
    }

    /// Appends a new open record to its copy's history.
    ///
    /// Returns `false` and stores nothing when the copy has no entry.
    pub fn append(&mut self, record: RentalRecord) -> bool {
        match self.entries.get_mut(&record.copy_id) {
            Some(history) => {
                history.push(record);
                true
            }
            None => false,
        }
    }

    /// Sets the end date of the copy's open record and returns a copy of it.
    pub fn close(&mut self, copy_id: CopyId, end: RentalDate) -> Option<RentalRecord> {
        let record = self
            .entries
            .get_mut(&copy_id)?
            .iter_mut()
            .find(|record| record.is_open())?;
        record.end = Some(end);
        Some(record.clone())
    }

    /// Copy IDs whose history is empty.
    pub fn never_rented(&self) -> impl Iterator<Item = CopyId> + '_ {
        self.entries
            .iter()
            .filter(|(_, history)| history.is_empty())
            .map(|(copy_id, _)| *copy_id)
    }

    /// Every record across all copies, grouped by copy ID ascending.
    pub fn records(&self) -> impl Iterator<Item = &RentalRecord> {
        self.entries.values().flatten()
    }

    pub fn open_rentals(&self) -> impl Iterator<Item = &RentalRecord> {
        self.records().filter(|record| record.is_open())
    }
}
