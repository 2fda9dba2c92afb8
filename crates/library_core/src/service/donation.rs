//! Donation intake.
//!
//! # Invariants
//! - One copy per non-blank comma-separated segment, in input order.
//! - Blank segments are skipped silently.
//! - A donation that would run out of copy IDs registers nothing.

use crate::error::{LibraryError, LibraryResult};
use crate::model::ids::CopyId;
use crate::service::library_service::{rejected, LibraryService};
use log::info;

/// Separator between titles in a donation string.
pub const DONATION_SEPARATOR: char = ',';

/// Trimmed, non-empty title segments of a donation string.
pub fn parse_donation(donated_titles: &str) -> impl Iterator<Item = &str> {
    donated_titles
        .split(DONATION_SEPARATOR)
        .map(str::trim)
        .filter(|title| !title.is_empty())
}

impl LibraryService {
    /// Registers one copy for every title in `"Title A,Title B,..."`.
    ///
    /// Returns the new copy IDs in input order. Duplicated titles add one
    /// copy per occurrence.
    ///
    /// # Errors
    /// - `CopyIdsExhausted` when fewer copy IDs remain than titles donated;
    ///   no copy is registered in that case.
    pub fn receive_donation(&mut self, donated_titles: &str) -> LibraryResult<Vec<CopyId>> {
        let titles: Vec<&str> = parse_donation(donated_titles).collect();
        if self.copy_ids_remaining() < titles.len() as u64 {
            return Err(rejected("donation_receive", LibraryError::CopyIdsExhausted));
        }
        let added = titles
            .into_iter()
            .map(|title| self.add_book(title))
            .collect::<LibraryResult<Vec<CopyId>>>()?;
        info!(
            "event=donation_receive module=donation status=ok copies_added={}",
            added.len()
        );
        Ok(added)
    }
}
