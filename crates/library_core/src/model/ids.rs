//! Copy and reader identifiers.
//!
//! # Responsibility
//! - Give copies and readers distinct ID types so they are never compared
//!   across spaces.
//! - Issue fresh IDs from one monotonic sequence per space.
//!
//! # Invariants
//! - An `IdSequence` never hands out the same value twice.
//! - IDs render as plain decimal text (`"1000"`) on every external surface.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::num::ParseIntError;
use std::str::FromStr;

/// First value issued by a default sequence.
pub const DEFAULT_FIRST_ID: u32 = 1000;

/// Identifier of one physical book copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct CopyId(u32);

/// Identifier of one registered reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ReaderId(u32);

macro_rules! textual_id {
    ($name:ident) => {
        impl $name {
            /// Wraps a raw numeric value.
            pub const fn new(value: u32) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value.
            pub const fn value(self) -> u32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                value.trim().parse::<u32>().map(Self)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.to_string()
            }
        }

        impl TryFrom<String> for $name {
            type Error = ParseIntError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

textual_id!(CopyId);
textual_id!(ReaderId);

/// Monotonic counter for one ID space.
///
/// Once `u32::MAX` has been issued the sequence is exhausted and issues
/// nothing further.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: Option<u32>,
}

impl IdSequence {
    /// Creates a sequence whose first issued value is `first`.
    pub fn starting_at(first: u32) -> Self {
        Self { next: Some(first) }
    }

    /// Number of values still available.
    pub fn remaining(&self) -> u64 {
        self.next
            .map_or(0, |next| u64::from(u32::MAX - next) + 1)
    }

    /// Issues the current value and advances, `None` once exhausted.
    pub fn next_value(&mut self) -> Option<u32> {
        let issued = self.next?;
        self.next = issued.checked_add(1);
        Some(issued)
    }

    pub fn next_copy_id(&mut self) -> Option<CopyId> {
        self.next_value().map(CopyId)
    }

    pub fn next_reader_id(&mut self) -> Option<ReaderId> {
        self.next_value().map(ReaderId)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(DEFAULT_FIRST_ID)
    }
}

#[cfg(test)]
mod tests {
    use super::{CopyId, IdSequence, ReaderId, DEFAULT_FIRST_ID};

    #[test]
    fn default_sequence_starts_at_one_thousand_and_increments() {
        let mut sequence = IdSequence::default();
        assert_eq!(sequence.next_copy_id(), Some(CopyId::new(DEFAULT_FIRST_ID)));
        assert_eq!(sequence.next_copy_id(), Some(CopyId::new(1001)));
        assert_eq!(sequence.remaining(), u64::from(u32::MAX - 1002) + 1);
    }

    #[test]
    fn sequence_is_exhausted_after_issuing_the_last_value() {
        let mut sequence = IdSequence::starting_at(u32::MAX - 1);
        assert_eq!(sequence.remaining(), 2);
        assert_eq!(sequence.next_reader_id(), Some(ReaderId::new(u32::MAX - 1)));
        assert_eq!(sequence.next_reader_id(), Some(ReaderId::new(u32::MAX)));
        assert_eq!(sequence.remaining(), 0);
        assert_eq!(sequence.next_reader_id(), None);
        assert_eq!(sequence.next_value(), None);
    }

    #[test]
    fn ids_render_and_parse_as_decimal_text() {
        let id: ReaderId = " 1042 ".parse().expect("decimal id should parse");
        assert_eq!(id, ReaderId::new(1042));
        assert_eq!(id.to_string(), "1042");
        assert!("10a".parse::<CopyId>().is_err());
    }

    #[test]
    fn numeric_order_wins_over_text_order() {
        assert!(ReaderId::new(9999) < ReaderId::new(10000));
    }
}
