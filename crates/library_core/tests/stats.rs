use library_core::{CopyId, LibraryService, ReaderId};

#[test]
fn ongoing_rentals_list_copy_and_start_per_reader() {
    let mut library = LibraryService::new();
    let first = library.add_book("Dune").unwrap();
    let second = library.add_book("Dune").unwrap();
    let paul = library.add_reader("Paul", "Atreides").unwrap();
    let chani = library.add_reader("Chani", "Kynes").unwrap();

    library.start_rental(first, paul, "01-01-2024").unwrap();
    library.end_rental(first, paul, "15-01-2024").unwrap();
    library.start_rental(first, paul, "20-01-2024").unwrap();
    library.start_rental(second, chani, "21-01-2024").unwrap();

    let ongoing = library.get_ongoing_rentals();
    assert_eq!(ongoing.len(), 2);
    assert_eq!(ongoing[&paul], "1000 20-01-2024");
    assert_eq!(ongoing[&chani], "1001 21-01-2024");

    library.end_rental(second, chani, "22-01-2024").unwrap();
    assert!(!library.get_ongoing_rentals().contains_key(&chani));
}

#[test]
fn rental_counts_cover_open_and_closed_records_per_title() {
    let mut library = LibraryService::new();
    let first = library.add_book("Dune").unwrap();
    library.add_book("Dune").unwrap();
    library.add_book("Emma").unwrap();
    let paul = library.add_reader("Paul", "Atreides").unwrap();

    library.start_rental(first, paul, "01-01-2024").unwrap();
    library.end_rental(first, paul, "15-01-2024").unwrap();
    library.start_rental(first, paul, "20-01-2024").unwrap();

    let counts = library.rental_counts();
    assert_eq!(counts.get("Dune"), Some(&2));
    assert_eq!(counts.get("Emma"), Some(&0));
}

#[test]
fn find_book_worm_is_none_without_rentals() {
    let mut library = LibraryService::new();
    library.add_book("Dune").unwrap();
    library.add_reader("Paul", "Atreides").unwrap();
    assert_eq!(library.find_book_worm(), None);
}

#[test]
fn find_book_worm_picks_highest_total() {
    let mut library = LibraryService::new();
    let copy = library.add_book("Dune").unwrap();
    let paul = library.add_reader("Paul", "Atreides").unwrap();
    let chani = library.add_reader("Chani", "Kynes").unwrap();

    library.start_rental(copy, paul, "01-01-2024").unwrap();
    library.end_rental(copy, paul, "02-01-2024").unwrap();
    library.start_rental(copy, chani, "03-01-2024").unwrap();
    library.end_rental(copy, chani, "04-01-2024").unwrap();
    library.start_rental(copy, chani, "05-01-2024").unwrap();

    assert_eq!(library.find_book_worm(), Some(chani));
}

#[test]
fn find_book_worm_breaks_ties_by_lowest_reader_id() {
    let mut library = LibraryService::new();
    let first = library.add_book("Dune").unwrap();
    let second = library.add_book("Emma").unwrap();
    let low = library.add_reader("Paul", "Atreides").unwrap();
    let high = library.add_reader("Chani", "Kynes").unwrap();
    assert!(low < high);

    library.start_rental(first, high, "01-01-2024").unwrap();
    library.start_rental(second, low, "01-01-2024").unwrap();

    assert_eq!(library.find_book_worm(), Some(ReaderId::new(1000)));
}

#[test]
fn lending_session_matches_documented_scenario() {
    let mut library = LibraryService::new();
    library.add_book("Dune").unwrap();
    library.add_book("Dune").unwrap();
    library.add_reader("Paul", "Atreides").unwrap();
    let copy = CopyId::new(1000);
    let reader = ReaderId::new(1000);

    library.start_rental(copy, reader, "01-01-2024").unwrap();
    assert_eq!(library.get_available_book("Dune").unwrap(), Some(CopyId::new(1001)));
    library.end_rental(copy, reader, "15-01-2024").unwrap();
    library.start_rental(copy, reader, "20-01-2024").unwrap();

    assert_eq!(library.get_ongoing_rentals()[&reader], "1000 20-01-2024");
    assert_eq!(library.rental_counts().get("Dune"), Some(&2));
    assert_eq!(library.find_book_worm(), Some(reader));
}
