//! The four menu operations.
//!
//! Each one prompts for what it needs, runs the matching inventory command and
//! reports the outcome on the console. Every inventory rejection is reported,
//! never raised; only console failures escape as `CliError`.

use std::io::{BufRead, Write};

use libris_core::{DomainError, DomainResult, execute};
use libris_inventory::{
    AddBook, AddCopies, Author, BookRecord, BorrowBook, Inventory, InventoryCommand, ReturnBook,
    Title,
};

use crate::console::Console;
use crate::error::CliError;

const RULE: &str = "----------------------------------------";

/// What `add_book` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was appended.
    Added { position: usize, copies: u64 },
    /// Copies were added to an existing record; `copies` is the new total.
    CopiesAdded { position: usize, copies: u64 },
    /// The entry already existed and the operator chose not to change it.
    Declined,
    /// The inventory refused the change (e.g. copy count overflow).
    Rejected(DomainError),
}

/// Execute `command`, log the emitted events and return the touched record.
fn dispatch(
    inventory: &mut Inventory,
    command: InventoryCommand,
) -> DomainResult<(usize, BookRecord)> {
    let events = execute(inventory, &command).inspect_err(|err| {
        tracing::info!(error = %err, "inventory command rejected");
    })?;

    let mut touched = None;
    for event in &events {
        let payload = serde_json::to_string(event).unwrap_or_default();
        tracing::debug!(event_type = event.event_type(), %payload, "inventory event applied");
        touched = Some(event.position());
    }

    touched
        .and_then(|position| inventory.get(position).map(|book| (position, book.clone())))
        .ok_or_else(|| DomainError::invariant("command produced no record change"))
}

pub fn add_book<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<AddOutcome, CliError> {
    console.say("\n--- ➕ Add New Book ---")?;

    let title = Title::parse(&console.non_empty("Enter the title of the book: ")?)?;
    let author = Author::parse(&console.non_empty("Enter the author's name: ")?)?;

    if inventory
        .find_entry(title.as_str(), author.as_str())
        .is_some()
    {
        console.say(format!("⚠️ Warning: '{title}' by {author} already exists."))?;
        console.say("Do you want to add more copies to the existing entry? (yes/no): ")?;
        let answer = console.non_empty("Enter choice: ")?;
        if answer.to_lowercase() != "yes" {
            console.say("Returning to main menu without changes.")?;
            return Ok(AddOutcome::Declined);
        }

        let copies = console.positive_integer("Enter the number of copies to add: ")?;
        let command = InventoryCommand::AddCopies(AddCopies {
            title,
            author,
            copies,
        });
        return match dispatch(inventory, command) {
            Ok((position, book)) => {
                console.say(format!(
                    "✅ Success: Added {copies} copies. Total copies now: {}",
                    book.copies
                ))?;
                Ok(AddOutcome::CopiesAdded {
                    position,
                    copies: book.copies,
                })
            }
            Err(err) => {
                console.say(format!("❌ Error: {err}"))?;
                Ok(AddOutcome::Rejected(err))
            }
        };
    }

    let copies = console.positive_integer("Enter the number of copies to add: ")?;
    let command = InventoryCommand::AddBook(AddBook {
        title: title.clone(),
        author: author.clone(),
        copies,
    });
    match dispatch(inventory, command) {
        Ok((position, book)) => {
            console.say(format!(
                "✅ Success: Book '{title}' by {author} added to the inventory with {} copies.",
                book.copies
            ))?;
            Ok(AddOutcome::Added {
                position,
                copies: book.copies,
            })
        }
        Err(err) => {
            console.say(format!("❌ Error: {err}"))?;
            Ok(AddOutcome::Rejected(err))
        }
    }
}

/// Lend one copy of the first record with a matching title.
///
/// Returns `true` when a copy was handed out.
pub fn borrow_book<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<bool, CliError> {
    console.say("\n--- ⬇️ Borrow Book ---")?;

    let title = Title::parse(&console.non_empty("Enter the title of the book to borrow: ")?)?;
    let command = InventoryCommand::BorrowBook(BorrowBook {
        title: title.clone(),
    });

    match dispatch(inventory, command) {
        Ok((_, book)) => {
            console.say(format!("✅ Success: You have borrowed '{}'.", book.title))?;
            console.say(format!("   {} copies remaining.", book.copies))?;
            Ok(true)
        }
        Err(DomainError::Unavailable(stored)) => {
            console.say(format!(
                "⚠️ Sorry, all copies of '{stored}' are currently borrowed."
            ))?;
            Ok(false)
        }
        Err(DomainError::NotFound(_)) => {
            console.say(format!(
                "❌ Error: Book with title '{title}' not found in the inventory."
            ))?;
            Ok(false)
        }
        Err(err) => {
            console.say(format!("❌ Error: {err}"))?;
            Ok(false)
        }
    }
}

/// Take back one copy of the first record with a matching title.
///
/// There is no cap: returns are accepted whether or not a copy was lent.
pub fn return_book<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<bool, CliError> {
    console.say("\n--- ⬆️ Return Book ---")?;

    let title = Title::parse(&console.non_empty("Enter the title of the book to return: ")?)?;
    let command = InventoryCommand::ReturnBook(ReturnBook {
        title: title.clone(),
    });

    match dispatch(inventory, command) {
        Ok((_, book)) => {
            console.say(format!(
                "✅ Success: Thank you for returning '{}'.",
                book.title
            ))?;
            console.say(format!("   Total copies now available: {}", book.copies))?;
            Ok(true)
        }
        Err(DomainError::NotFound(_)) => {
            console.say(format!(
                "❌ Error: Book with title '{title}' not found in the inventory."
            ))?;
            console.say("Please check the title and try again.")?;
            Ok(false)
        }
        Err(err) => {
            console.say(format!("❌ Error: {err}"))?;
            Ok(false)
        }
    }
}

pub fn display_inventory<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    console.say("\n--- 📚 Current Library Inventory ---")?;
    if inventory.is_empty() {
        console.say("The library currently has no books in the inventory.")?;
        return Ok(());
    }

    console.say(format!("Total Unique Books: {}", inventory.len()))?;
    console.say(RULE)?;
    for (i, book) in inventory.books().iter().enumerate() {
        console.say(format!("Book {}:", i + 1))?;
        console.say(format!("  Title: {}", book.title))?;
        console.say(format!("  Author: {}", book.author))?;
        console.say(format!("  Copies Available: {}", book.copies))?;
        console.say(RULE)?;
    }
    Ok(())
}
