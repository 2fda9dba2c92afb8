use library_core::{
    CopyId, LibraryConfig, LibraryError, LibraryErrorKind, LibraryService, ReaderId,
};
use std::collections::BTreeSet;

#[test]
fn add_book_issues_sequential_ids_and_counts_copies_per_title() {
    let mut library = LibraryService::new();

    assert_eq!(library.add_book("Dune").unwrap(), CopyId::new(1000));
    assert_eq!(library.add_book("Dune").unwrap(), CopyId::new(1001));
    library.add_book("Anathem").unwrap();

    let titles = library.get_titles();
    let listed: Vec<(&str, usize)> = titles.iter().map(|(t, n)| (t.as_str(), *n)).collect();
    assert_eq!(listed, vec![("Anathem", 1), ("Dune", 2)]);
}

#[test]
fn get_books_lists_every_copy() {
    let mut library = LibraryService::new();
    library.add_book("Dune").unwrap();
    library.add_book("Emma").unwrap();
    library.add_book("Dune").unwrap();

    let expected: BTreeSet<CopyId> = [1000, 1001, 1002].into_iter().map(CopyId::new).collect();
    assert_eq!(library.get_books(), expected);
}

#[test]
fn book_and_reader_ids_are_independent_sequences() {
    let mut library = LibraryService::new();
    library.add_book("Dune").unwrap();
    library.add_book("Dune").unwrap();

    let reader = library.add_reader("Paul", "Atreides").unwrap();
    assert_eq!(reader, ReaderId::new(1000));
    assert_eq!(library.get_reader_name(reader).unwrap(), "Paul Atreides");
}

#[test]
fn get_reader_name_rejects_unknown_reader() {
    let library = LibraryService::new();
    let err = library.get_reader_name(ReaderId::new(1000)).unwrap_err();
    assert_eq!(err, LibraryError::ReaderNotFound(ReaderId::new(1000)));
}

#[test]
fn config_seeds_both_sequences() {
    let config = LibraryConfig {
        first_copy_id: 5000,
        first_reader_id: 7,
        ..LibraryConfig::default()
    };
    let mut library = LibraryService::with_config(&config);

    assert_eq!(library.add_book("Dune").unwrap(), CopyId::new(5000));
    assert_eq!(library.add_reader("Leto", "Atreides").unwrap(), ReaderId::new(7));
    assert_eq!(library.add_reader("Jessica", "Atreides").unwrap(), ReaderId::new(8));
    assert_eq!(library.get_readers().len(), 2);
}

#[test]
fn ids_are_not_reused_after_pruning() {
    let mut library = LibraryService::new();
    library.add_book("Dune").unwrap();
    library.add_book("Emma").unwrap();
    library.remove_books();

    assert!(library.get_books().is_empty());
    assert_eq!(library.add_book("Dune").unwrap(), CopyId::new(1002));
}

#[test]
fn add_book_fails_once_copy_ids_run_out() {
    let config = LibraryConfig {
        first_copy_id: u32::MAX,
        ..LibraryConfig::default()
    };
    let mut library = LibraryService::with_config(&config);

    let last = library.add_book("Dune").unwrap();
    assert_eq!(last, CopyId::new(u32::MAX));

    let err = library.add_book("Emma").unwrap_err();
    assert_eq!(err, LibraryError::CopyIdsExhausted);
    assert_eq!(err.kind(), LibraryErrorKind::Exhausted);

    let expected: BTreeSet<CopyId> = [last].into_iter().collect();
    assert_eq!(library.get_books(), expected);
    assert_eq!(library.get_titles().len(), 1);
    assert_eq!(library.get_rentals(last).unwrap().len(), 0);
}

#[test]
fn add_reader_fails_once_reader_ids_run_out() {
    let config = LibraryConfig {
        first_reader_id: u32::MAX,
        ..LibraryConfig::default()
    };
    let mut library = LibraryService::with_config(&config);

    let last = library.add_reader("Leto", "Atreides").unwrap();
    let err = library.add_reader("Jessica", "Atreides").unwrap_err();
    assert_eq!(err, LibraryError::ReaderIdsExhausted);

    assert_eq!(library.get_readers().len(), 1);
    assert_eq!(library.get_reader_name(last).unwrap(), "Leto Atreides");
}

#[test]
fn donation_larger_than_remaining_ids_registers_nothing() {
    let config = LibraryConfig {
        first_copy_id: u32::MAX - 1,
        ..LibraryConfig::default()
    };
    let mut library = LibraryService::with_config(&config);

    let err = library.receive_donation("Dune,Emma,Ulysses").unwrap_err();
    assert_eq!(err, LibraryError::CopyIdsExhausted);
    assert!(library.get_books().is_empty());
    assert!(library.get_titles().is_empty());

    let added = library.receive_donation("Dune,Emma").unwrap();
    assert_eq!(added, vec![CopyId::new(u32::MAX - 1), CopyId::new(u32::MAX)]);
}
