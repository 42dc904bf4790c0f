use std::io::Cursor;

use libris_cli::{CliError, Console, run};
use libris_inventory::Inventory;

/// Drive a full menu session from a script and return the inventory and transcript.
fn session(script: &[&str]) -> (Inventory, Result<(), CliError>, String) {
    let mut input = script.join("\n");
    input.push('\n');

    let mut inventory = Inventory::seeded();
    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
    let result = run(&mut inventory, &mut console);
    let transcript = String::from_utf8(console.into_output()).unwrap();
    (inventory, result, transcript)
}

fn copies(inventory: &Inventory, title: &str) -> u64 {
    inventory.find_by_title(title).unwrap().1.copies
}

#[test]
fn exit_prints_farewell() {
    let (inventory, result, out) = session(&["5"]);
    assert!(result.is_ok());
    assert_eq!(inventory, Inventory::seeded());
    assert!(out.contains("1. Add New Book\n2. Borrow Book\n3. Return Book\n4. Display Inventory\n5. Exit\n"));
    assert!(out.contains("Enter your choice (1-5): "));
    assert!(out.ends_with("👋 Thank you for using the Library System. Goodbye!\n"));
}

#[test]
fn invalid_choices_loop_back_to_menu() {
    let (_, result, out) = session(&["", "9", "abc", "5"]);
    assert!(result.is_ok());
    assert_eq!(
        out.matches("❌ Invalid choice. Please enter a number between 1 and 5.")
            .count(),
        3
    );
    assert_eq!(out.matches("Enter your choice (1-5): ").count(), 4);
}

#[test]
fn borrow_until_empty_then_return() {
    let (inventory, result, out) = session(&[
        "2", "1984", // 2 -> 1
        "2", "1984", // 1 -> 0
        "2", "1984", // no copies
        "3", "1984", // 0 -> 1
        "5",
    ]);
    assert!(result.is_ok());
    assert_eq!(copies(&inventory, "1984"), 1);
    assert!(out.contains("   1 copies remaining."));
    assert!(out.contains("   0 copies remaining."));
    assert!(out.contains("⚠️ Sorry, all copies of '1984' are currently borrowed."));
    assert!(out.contains("   Total copies now available: 1"));
}

#[test]
fn add_then_display_shows_new_record_last() {
    let (inventory, result, out) = session(&[
        "1", "Dune", "Frank Herbert", "0", "x", "3", // two rejected counts
        "4", "5",
    ]);
    assert!(result.is_ok());
    assert_eq!(inventory.len(), 4);
    assert_eq!(out.matches("❌ Error:").count(), 2);
    assert!(out.contains("Total Unique Books: 4"));
    assert!(out.contains("Book 4:\n  Title: Dune\n  Author: Frank Herbert\n  Copies Available: 3\n"));
}

#[test]
fn adding_existing_entry_keeps_length() {
    let (inventory, result, _) = session(&[
        "1", "the hitchhiker's guide to the galaxy", "DOUGLAS ADAMS", "yes", "10", "5",
    ]);
    assert!(result.is_ok());
    assert_eq!(inventory.len(), 3);
    assert_eq!(copies(&inventory, "The Hitchhiker's Guide to the Galaxy"), 13);
}

#[test]
fn reprompts_match_invalid_attempts() {
    let (inventory, result, out) = session(&["1", "", "  ", "Dune", "\t", "Frank Herbert", "", "-1", "two", "2", "5"]);
    assert!(result.is_ok());
    assert_eq!(copies(&inventory, "Dune"), 2);
    assert_eq!(out.matches("Enter the title of the book: ").count(), 3);
    assert_eq!(out.matches("Enter the author's name: ").count(), 2);
    assert_eq!(out.matches("Enter the number of copies to add: ").count(), 4);
    assert_eq!(out.matches("❌ Error:").count(), 6);
}

#[test]
fn closed_input_ends_session() {
    let mut inventory = Inventory::seeded();
    let mut console = Console::new(Cursor::new(b"2\n".to_vec()), Vec::new());
    let result = run(&mut inventory, &mut console);
    assert!(matches!(result, Err(CliError::InputClosed)));
    assert_eq!(inventory, Inventory::seeded());
}

#[test]
fn copy_overflow_is_reported_and_session_continues() {
    let (inventory, result, out) = session(&[
        "1", "Big", "Author", "18446744073709551615", // largest accepted count
        "3", "Big", // one more would overflow
        "2", "Big", "3", "Big", // borrow then return again fits
        "4", "5",
    ]);
    assert!(result.is_ok());
    assert_eq!(copies(&inventory, "Big"), u64::MAX);
    assert!(out.contains("❌ Error: invariant violated: copy count overflow"));
    assert!(out.contains("Copies Available: 18446744073709551615"));
    assert!(out.ends_with("👋 Thank you for using the Library System. Goodbye!\n"));
}
