//! Core domain logic for the library lending archive.
//! This crate is the single source of truth for rental invariants.

pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, LibraryConfig, LoggingConfig};
pub use error::{LibraryError, LibraryErrorKind, LibraryResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::copy::BookCopy;
pub use model::ids::{CopyId, IdSequence, ReaderId};
pub use model::reader::Reader;
pub use model::rental::{RentalDate, RentalDateError, RentalRecord, ONGOING};
pub use service::donation::parse_donation;
pub use service::library_service::{LibraryService, NOT_AVAILABLE};
pub use service::maintenance::MaintenanceReport;
pub use service::shared::SharedLibrary;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
