//! In-memory stores behind the archive services.
//!
//! # Responsibility
//! - Hold the catalog, reader registry and rental ledger as plain indexes.
//! - Keep index bookkeeping (bucket cleanup, ordering) inside the store.
//!
//! # Invariants
//! - Stores never validate cross-store rules; services do that before
//!   touching any store.
//! - Iteration order is deterministic (ordered maps keyed by ID or title).

pub mod catalog;
pub mod ledger;
pub mod reader_registry;
