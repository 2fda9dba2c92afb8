//! Archive use-case services.
//!
//! # Responsibility
//! - Expose the archive operations on `LibraryService`.
//! - Split donation intake, maintenance and statistics into their own
//!   modules while sharing one owned archive value.
//!
//! # Invariants
//! - Only this layer mutates the stores under `repo`.

pub mod donation;
pub mod library_service;
pub mod maintenance;
pub mod shared;
pub mod stats;
