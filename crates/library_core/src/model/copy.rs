//! Book copy record.
//!
//! # Invariants
//! - `rented` is `true` iff the ledger holds exactly one open rental for `id`.
//! - `title` never changes after registration.

use crate::model::ids::CopyId;
use serde::{Deserialize, Serialize};

/// One physical copy of a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCopy {
    pub id: CopyId,
    pub title: String,
    /// Cached mirror of "has an open rental".
    pub rented: bool,
}

impl BookCopy {
    /// Creates an available copy.
    pub fn new(id: CopyId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            rented: false,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.rented
    }
}
