//! Domain records for the lending archive.
//!
//! # Responsibility
//! - Define copies, readers and rental records with their ID types.
//! - Own the fixed date encoding shared by every rental surface.
//!
//! # Invariants
//! - Copy and reader IDs live in separate spaces and are never reused.
//! - `rented`/`renting` flags mirror the rental ledger; the ledger wins.

pub mod copy;
pub mod ids;
pub mod reader;
pub mod rental;
