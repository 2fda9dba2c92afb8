//! Reader registry.
//!
//! # Invariants
//! - Readers are only ever added; there is no removal path.

use crate::model::ids::ReaderId;
use crate::model::reader::Reader;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone)]
pub struct ReaderRegistry {
    readers: BTreeMap<ReaderId, Reader>,
}

impl ReaderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, reader: Reader) {
        self.readers.insert(reader.id, reader);
    }

    pub fn get(&self, id: ReaderId) -> Option<&Reader> {
        self.readers.get(&id)
    }

    pub fn get_mut(&mut self, id: ReaderId) -> Option<&mut Reader> {
        self.readers.get_mut(&id)
    }

    /// Registered reader IDs, ascending.
    pub fn ids(&self) -> impl Iterator<Item = ReaderId> + '_ {
        self.readers.keys().copied()
    }
}
