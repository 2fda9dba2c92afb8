//! Thread-safe handle around one archive.
//!
//! # Invariants
//! - Every call runs under one exclusive lock covering the whole archive,
//!   so a rental change never interleaves with another operation.
//! - A poisoned lock is recovered: operations validate before they mutate,
//!   so a panic inside a caller closure cannot leave stores half-updated.

use crate::service::library_service::LibraryService;
use std::sync::{Arc, Mutex, MutexGuard};

/// Cloneable, shareable archive handle.
#[derive(Debug, Clone, Default)]
pub struct SharedLibrary {
    inner: Arc<Mutex<LibraryService>>,
}

impl SharedLibrary {
    pub fn new(service: LibraryService) -> Self {
        Self {
            inner: Arc::new(Mutex::new(service)),
        }
    }

    /// Runs `f` as one critical section over the archive.
    pub fn with<T>(&self, f: impl FnOnce(&mut LibraryService) -> T) -> T {
        f(&mut self.lock())
    }

    /// Clones the current archive state.
    pub fn snapshot(&self) -> LibraryService {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, LibraryService> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
