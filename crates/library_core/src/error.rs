//! Error taxonomy for archive operations.
//!
//! # Invariants
//! - Every failing operation returns before mutating archive state.
//! - Each variant maps to exactly one `LibraryErrorKind`.

use crate::model::ids::{CopyId, ReaderId};
use crate::model::rental::RentalDateError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Coarse grouping used by callers that only branch on the failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryErrorKind {
    NotFound,
    Conflict,
    InvalidInput,
    Exhausted,
}

/// Failure of one archive operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// No copy is registered under this ID.
    CopyNotFound(CopyId),
    /// No catalog bucket exists for this title.
    TitleNotFound(String),
    /// No reader is registered under this ID.
    ReaderNotFound(ReaderId),
    /// The copy already has an open rental.
    AlreadyRented(CopyId),
    /// The reader already has an open rental.
    AlreadyRenting(ReaderId),
    /// The copy has no open rental to close.
    NotRented(CopyId),
    /// The copy's open rental belongs to another reader.
    RentalMismatch {
        copy_id: CopyId,
        reader_id: ReaderId,
    },
    /// Date text is not a valid `DD-MM-YYYY` day.
    InvalidDate(RentalDateError),
    /// End date precedes the open rental's start date.
    EndBeforeStart { copy_id: CopyId },
    /// Every copy ID has already been issued.
    CopyIdsExhausted,
    /// Every reader ID has already been issued.
    ReaderIdsExhausted,
}

impl LibraryError {
    pub fn kind(&self) -> LibraryErrorKind {
        match self {
            Self::CopyNotFound(_) | Self::TitleNotFound(_) | Self::ReaderNotFound(_) => {
                LibraryErrorKind::NotFound
            }
            Self::AlreadyRented(_)
            | Self::AlreadyRenting(_)
            | Self::NotRented(_)
            | Self::RentalMismatch { .. } => LibraryErrorKind::Conflict,
            Self::InvalidDate(_) | Self::EndBeforeStart { .. } => LibraryErrorKind::InvalidInput,
            Self::CopyIdsExhausted | Self::ReaderIdsExhausted => LibraryErrorKind::Exhausted,
        }
    }

    /// Stable snake_case code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::CopyNotFound(_) => "copy_not_found",
            Self::TitleNotFound(_) => "title_not_found",
            Self::ReaderNotFound(_) => "reader_not_found",
            Self::AlreadyRented(_) => "already_rented",
            Self::AlreadyRenting(_) => "already_renting",
            Self::NotRented(_) => "not_rented",
            Self::RentalMismatch { .. } => "rental_mismatch",
            Self::InvalidDate(_) => "invalid_date",
            Self::EndBeforeStart { .. } => "end_before_start",
            Self::CopyIdsExhausted => "copy_ids_exhausted",
            Self::ReaderIdsExhausted => "reader_ids_exhausted",
        }
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CopyNotFound(id) => write!(f, "book copy not present in the archive: {id}"),
            Self::TitleNotFound(title) => write!(f, "title not present in the archive: `{title}`"),
            Self::ReaderNotFound(id) => write!(f, "reader not present in the archive: {id}"),
            Self::AlreadyRented(id) => write!(f, "book copy is already rented: {id}"),
            Self::AlreadyRenting(id) => write!(f, "reader is already renting a book: {id}"),
            Self::NotRented(id) => write!(f, "book copy has no ongoing rental: {id}"),
            Self::RentalMismatch { copy_id, reader_id } => write!(
                f,
                "ongoing rental of book copy {copy_id} does not belong to reader {reader_id}"
            ),
            Self::InvalidDate(err) => write!(f, "{err}"),
            Self::EndBeforeStart { copy_id } => write!(
                f,
                "rental of book copy {copy_id} cannot end before it started"
            ),
            Self::CopyIdsExhausted => write!(f, "no book copy IDs left to issue"),
            Self::ReaderIdsExhausted => write!(f, "no reader IDs left to issue"),
        }
    }
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RentalDateError> for LibraryError {
    fn from(value: RentalDateError) -> Self {
        Self::InvalidDate(value)
    }
}
