//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `library_core` linkage by running a short scripted lending session.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Reads an optional JSON config from the path in `LIBRARY_CONFIG`; file
//! logging starts only when that config sets `logging.log_dir`.

use library_core::{
    init_logging, LibraryConfig, LibraryError, LibraryService, NOT_AVAILABLE,
};
use std::process::ExitCode;

const CONFIG_ENV: &str = "LIBRARY_CONFIG";

fn main() -> ExitCode {
    let config = match load_config() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("library_cli config error: {message}");
            return ExitCode::FAILURE;
        }
    };
    if config.logging.log_dir.is_some() {
        if let Err(message) = init_logging(&config.logging) {
            eprintln!("library_cli logging error: {message}");
            return ExitCode::FAILURE;
        }
    }

    println!("library_core version={}", library_core::core_version());
    match run_session(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_session module=cli status=error error_code={}", err.code());
            eprintln!("library_cli session failed: {err}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> Result<LibraryConfig, String> {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return Ok(LibraryConfig::default());
    };
    let raw = std::fs::read_to_string(&path)
        .map_err(|err| format!("failed to read `{}`: {err}", path.to_string_lossy()))?;
    LibraryConfig::from_json_str(&raw).map_err(|err| err.to_string())
}

fn run_session(config: &LibraryConfig) -> Result<(), LibraryError> {
    let mut library = LibraryService::with_config(config);
    let dune = library.add_book("Dune")?;
    library.add_book("Dune")?;
    let paul = library.add_reader("Paul", "Atreides")?;
    let chani = library.add_reader("Chani", "Kynes")?;

    library.start_rental(dune, paul, "01-01-2024")?;
    let next = library
        .get_available_book("Dune")?
        .map_or_else(|| NOT_AVAILABLE.to_string(), |id| id.to_string());
    println!("available Dune copy={next}");
    library.end_rental(dune, paul, "15-01-2024")?;
    library.start_rental(dune, chani, "20-01-2024")?;

    library.receive_donation("Foundation,Foundation,Dune")?;
    let report = library.remove_books();

    println!("titles={:?}", library.get_titles());
    println!("rentals copy={dune} {:?}", library.get_rentals(dune)?);
    println!("ongoing={:?}", library.get_ongoing_rentals());
    println!("pruned copies={}", report.removed_copies.len());
    println!("rental_counts={:?}", library.rental_counts());
    match library.find_book_worm() {
        Some(reader) => println!("book_worm={} ({})", reader, library.get_reader_name(reader)?),
        None => println!("book_worm=none"),
    }
    Ok(())
}
