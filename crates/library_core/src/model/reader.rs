//! Registered reader record.
//!
//! # Invariants
//! - `renting` is `true` iff exactly one open rental across the whole
//!   ledger names this reader.
//! - Readers are never deleted.

use crate::model::ids::ReaderId;
use serde::{Deserialize, Serialize};

/// A person allowed to borrow copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: ReaderId,
    pub first_name: String,
    pub last_name: String,
    pub renting: bool,
}

impl Reader {
    pub fn new(id: ReaderId, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            renting: false,
        }
    }

    /// Returns `"<first> <last>"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
