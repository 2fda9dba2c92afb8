//! Archive use-case service: registration, lookups and the rental lifecycle.
//!
//! # Responsibility
//! - Own the catalog, reader registry, rental ledger and both ID sequences.
//! - Apply every rental state change to copy flag, reader flag and ledger
//!   as one unit.
//!
//! # Invariants
//! - Each mutating call validates everything first, then mutates; a
//!   rejected call leaves all stores untouched.
//! - `BookCopy::rented` and `Reader::renting` always agree with the ledger.
//! - A copy and a reader are bound only by the single open rental record.

use crate::config::LibraryConfig;
use crate::error::{LibraryError, LibraryResult};
use crate::model::copy::BookCopy;
use crate::model::ids::{CopyId, IdSequence, ReaderId};
use crate::model::reader::Reader;
use crate::model::rental::{RentalDate, RentalRecord};
use crate::repo::catalog::Catalog;
use crate::repo::ledger::RentalLedger;
use crate::repo::reader_registry::ReaderRegistry;
use log::{debug, info, warn};
use std::collections::{BTreeMap, BTreeSet};

/// Label callers show when `get_available_book` finds no free copy.
pub const NOT_AVAILABLE: &str = "Not available";

/// In-memory lending archive.
#[derive(Debug, Clone)]
pub struct LibraryService {
    pub(crate) catalog: Catalog,
    pub(crate) readers: ReaderRegistry,
    pub(crate) ledger: RentalLedger,
    copy_ids: IdSequence,
    reader_ids: IdSequence,
}

impl Default for LibraryService {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryService {
    /// Creates an empty archive with both ID sequences starting at 1000.
    pub fn new() -> Self {
        Self::with_config(&LibraryConfig::default())
    }

    /// Creates an empty archive seeded from `config`.
    pub fn with_config(config: &LibraryConfig) -> Self {
        Self {
            catalog: Catalog::new(),
            readers: ReaderRegistry::new(),
            ledger: RentalLedger::new(),
            copy_ids: IdSequence::starting_at(config.first_copy_id),
            reader_ids: IdSequence::starting_at(config.first_reader_id),
        }
    }

    /// Registers one more copy of `title` and returns its ID.
    ///
    /// # Contract
    /// - Repeatable for the same title; each call adds one copy.
    /// - The new copy starts available with an empty rental history.
    ///
    /// # Errors
    /// - `CopyIdsExhausted` once every copy ID has been issued.
    pub fn add_book(&mut self, title: impl Into<String>) -> LibraryResult<CopyId> {
        let id = self
            .copy_ids
            .next_copy_id()
            .ok_or(LibraryError::CopyIdsExhausted)
            .map_err(|err| rejected("book_add", err))?;
        let copy = BookCopy::new(id, title);
        debug!("event=book_add module=catalog status=ok copy_id={id}");
        self.catalog.insert(copy);
        self.ledger.open_entry(id);
        Ok(id)
    }

    /// Titles in alphabetical order with their registered copy counts.
    pub fn get_titles(&self) -> BTreeMap<String, usize> {
        self.catalog
            .buckets()
            .map(|(title, bucket)| (title.to_string(), bucket.len()))
            .collect()
    }

    /// Every registered copy ID across all titles.
    pub fn get_books(&self) -> BTreeSet<CopyId> {
        self.catalog.copies().map(|copy| copy.id).collect()
    }

    /// Registers a reader and returns the new ID.
    ///
    /// # Errors
    /// - `ReaderIdsExhausted` once every reader ID has been issued.
    pub fn add_reader(
        &mut self,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> LibraryResult<ReaderId> {
        let id = self
            .reader_ids
            .next_reader_id()
            .ok_or(LibraryError::ReaderIdsExhausted)
            .map_err(|err| rejected("reader_add", err))?;
        self.readers.insert(Reader::new(id, first_name, last_name));
        debug!("event=reader_add module=readers status=ok reader_id={id}");
        Ok(id)
    }

    /// Number of copy IDs still available for registration.
    pub(crate) fn copy_ids_remaining(&self) -> u64 {
        self.copy_ids.remaining()
    }

    /// Returns `"<first> <last>"` for a registered reader.
    pub fn get_reader_name(&self, reader_id: ReaderId) -> LibraryResult<String> {
        self.reader(reader_id).map(Reader::full_name)
    }

    pub fn get_readers(&self) -> BTreeSet<ReaderId> {
        self.readers.ids().collect()
    }

    /// Finds an available copy of `title`.
    ///
    /// Returns `Ok(None)` when every copy is out. The lowest available ID is
    /// picked so results are reproducible.
    ///
    /// # Errors
    /// - `TitleNotFound` when the catalog has no bucket for `title`.
    pub fn get_available_book(&self, title: &str) -> LibraryResult<Option<CopyId>> {
        let bucket = self
            .catalog
            .copies_of(title)
            .ok_or_else(|| LibraryError::TitleNotFound(title.to_string()))?;
        Ok(bucket.iter().copied().find(|id| {
            self.catalog
                .get(*id)
                .is_some_and(BookCopy::is_available)
        }))
    }

    /// Lends `copy_id` to `reader_id` from `start_date` (`DD-MM-YYYY`).
    ///
    /// # Errors
    /// - `CopyNotFound` / `ReaderNotFound` for unknown IDs.
    /// - `AlreadyRented` when the copy is out.
    /// - `AlreadyRenting` when the reader already holds a copy.
    /// - `InvalidDate` when `start_date` is not a valid `DD-MM-YYYY` day.
    pub fn start_rental(
        &mut self,
        copy_id: CopyId,
        reader_id: ReaderId,
        start_date: &str,
    ) -> LibraryResult<()> {
        let start = self
            .check_start(copy_id, reader_id, start_date)
            .map_err(|err| rejected("rental_start", err))?;

        self.ledger
            .append(RentalRecord::open(copy_id, reader_id, start));
        self.set_flags(copy_id, reader_id, true);
        info!(
            "event=rental_start module=rental status=ok copy_id={copy_id} reader_id={reader_id} start={start}"
        );
        Ok(())
    }

    /// Closes the open rental of `copy_id` held by `reader_id`.
    ///
    /// # Errors
    /// - `CopyNotFound` / `ReaderNotFound` for unknown IDs.
    /// - `InvalidDate` when `end_date` is not a valid `DD-MM-YYYY` day.
    /// - `NotRented` when the copy has no open rental.
    /// - `RentalMismatch` when the open rental belongs to another reader.
    /// - `EndBeforeStart` when `end_date` precedes the rental start.
    pub fn end_rental(
        &mut self,
        copy_id: CopyId,
        reader_id: ReaderId,
        end_date: &str,
    ) -> LibraryResult<()> {
        let end = self
            .check_end(copy_id, reader_id, end_date)
            .map_err(|err| rejected("rental_end", err))?;

        self.ledger.close(copy_id, end);
        self.set_flags(copy_id, reader_id, false);
        info!(
            "event=rental_end module=rental status=ok copy_id={copy_id} reader_id={reader_id} end={end}"
        );
        Ok(())
    }

    /// Rentals of one copy keyed by reader, rendered `"<start> <end|ONGOING>"`.
    ///
    /// A reader who borrowed the copy more than once appears once, with the
    /// most recent rental; `rental_history` keeps every record.
    ///
    /// # Errors
    /// - `CopyNotFound` when the ledger has no entry for `copy_id`.
    pub fn get_rentals(&self, copy_id: CopyId) -> LibraryResult<BTreeMap<ReaderId, String>> {
        let history = self
            .ledger
            .history(copy_id)
            .ok_or(LibraryError::CopyNotFound(copy_id))?;
        Ok(history
            .iter()
            .map(|record| (record.reader_id, record.period_label()))
            .collect())
    }

    /// Full ordered rental history of one copy.
    pub fn rental_history(&self, copy_id: CopyId) -> LibraryResult<Vec<RentalRecord>> {
        self.ledger
            .history(copy_id)
            .map(<[RentalRecord]>::to_vec)
            .ok_or(LibraryError::CopyNotFound(copy_id))
    }

    pub fn is_rented(&self, copy_id: CopyId) -> LibraryResult<bool> {
        self.copy(copy_id).map(|copy| copy.rented)
    }

    pub fn is_renting(&self, reader_id: ReaderId) -> LibraryResult<bool> {
        self.reader(reader_id).map(|reader| reader.renting)
    }

    fn copy(&self, copy_id: CopyId) -> LibraryResult<&BookCopy> {
        self.catalog
            .get(copy_id)
            .ok_or(LibraryError::CopyNotFound(copy_id))
    }

    fn reader(&self, reader_id: ReaderId) -> LibraryResult<&Reader> {
        self.readers
            .get(reader_id)
            .ok_or(LibraryError::ReaderNotFound(reader_id))
    }

    fn check_start(
        &self,
        copy_id: CopyId,
        reader_id: ReaderId,
        start_date: &str,
    ) -> LibraryResult<RentalDate> {
        let copy = self.copy(copy_id)?;
        let reader = self.reader(reader_id)?;
        if copy.rented {
            return Err(LibraryError::AlreadyRented(copy_id));
        }
        if reader.renting {
            return Err(LibraryError::AlreadyRenting(reader_id));
        }
        Ok(RentalDate::parse(start_date)?)
    }

    fn check_end(
        &self,
        copy_id: CopyId,
        reader_id: ReaderId,
        end_date: &str,
    ) -> LibraryResult<RentalDate> {
        self.copy(copy_id)?;
        self.reader(reader_id)?;
        let end = RentalDate::parse(end_date)?;
        let open = self
            .ledger
            .open_rental(copy_id)
            .ok_or(LibraryError::NotRented(copy_id))?;
        if open.reader_id != reader_id {
            return Err(LibraryError::RentalMismatch { copy_id, reader_id });
        }
        if end < open.start {
            return Err(LibraryError::EndBeforeStart { copy_id });
        }
        Ok(end)
    }

    // Callers have already resolved both IDs in check_start/check_end.
    fn set_flags(&mut self, copy_id: CopyId, reader_id: ReaderId, out: bool) {
        if let Some(copy) = self.catalog.get_mut(copy_id) {
            copy.rented = out;
        }
        if let Some(reader) = self.readers.get_mut(reader_id) {
            reader.renting = out;
        }
    }
}

pub(crate) fn rejected(event: &str, err: LibraryError) -> LibraryError {
    warn!(
        "event={event} module=archive status=rejected error_code={} error={err}",
        err.code()
    );
    err
}
