//! Title catalog and copy registry.
//!
//! # Responsibility
//! - Map titles to the copies registered under them.
//! - Map copy IDs to copy records.
//!
//! # Invariants
//! - Every registered copy sits in exactly one title bucket.
//! - A title with no remaining copies has no bucket.

use crate::model::copy::BookCopy;
use crate::model::ids::CopyId;
use std::collections::{BTreeMap, BTreeSet};

/// Title buckets plus the copy registry they index.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    titles: BTreeMap<String, BTreeSet<CopyId>>,
    copies: BTreeMap<CopyId, BookCopy>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one copy, creating its title bucket when absent.
    pub fn insert(&mut self, copy: BookCopy) {
        self.titles
            .entry(copy.title.clone())
            .or_default()
            .insert(copy.id);
        self.copies.insert(copy.id, copy);
    }

    /// Removes one copy from the registry and its bucket.
    ///
    /// Drops the bucket when it becomes empty.
    pub fn remove(&mut self, id: CopyId) -> Option<BookCopy> {
        let copy = self.copies.remove(&id)?;
        if let Some(bucket) = self.titles.get_mut(copy.title.as_str()) {
            bucket.remove(&id);
            if bucket.is_empty() {
                self.titles.remove(copy.title.as_str());
            }
        }
        Some(copy)
    }

    pub fn get(&self, id: CopyId) -> Option<&BookCopy> {
        self.copies.get(&id)
    }

    pub fn get_mut(&mut self, id: CopyId) -> Option<&mut BookCopy> {
        self.copies.get_mut(&id)
    }

    pub fn contains_title(&self, title: &str) -> bool {
        self.titles.contains_key(title)
    }

    /// Copy IDs registered under `title`, ascending.
    pub fn copies_of(&self, title: &str) -> Option<&BTreeSet<CopyId>> {
        self.titles.get(title)
    }

    /// Title buckets in alphabetical order.
    pub fn buckets(&self) -> impl Iterator<Item = (&str, &BTreeSet<CopyId>)> {
        self.titles
            .iter()
            .map(|(title, bucket)| (title.as_str(), bucket))
    }

    /// Every copy record, ascending by ID.
    pub fn copies(&self) -> impl Iterator<Item = &BookCopy> {
        self.copies.values()
    }
}
