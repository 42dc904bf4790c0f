use std::io::{BufRead, Write};

use libris_inventory::Inventory;

use crate::console::Console;
use crate::error::CliError;
use crate::operations::{add_book, borrow_book, display_inventory, return_book};

const BANNER: &str = "==================================================";
const RULE: &str = "--------------------------------------------------";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    AddBook,
    BorrowBook,
    ReturnBook,
    DisplayInventory,
    Exit,
}

impl MenuChoice {
    /// `None` for anything other than "1" through "5" (surrounding whitespace ignored).
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuChoice::AddBook),
            "2" => Some(MenuChoice::BorrowBook),
            "3" => Some(MenuChoice::ReturnBook),
            "4" => Some(MenuChoice::DisplayInventory),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), CliError> {
    console.say(format!("\n{BANNER}"))?;
    console.say("📖 Welcome to the Library Management System")?;
    console.say(BANNER)?;
    console.say("Please choose an option:")?;
    console.say("1. Add New Book")?;
    console.say("2. Borrow Book")?;
    console.say("3. Return Book")?;
    console.say("4. Display Inventory")?;
    console.say("5. Exit")?;
    console.say(RULE)
}

/// Run the menu until the operator picks "5".
///
/// Only console failures (including closed input) end the loop early.
pub fn run<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    loop {
        print_menu(console)?;
        let raw = console.ask("Enter your choice (1-5): ")?;

        let Some(choice) = MenuChoice::parse(&raw) else {
            tracing::debug!(input = raw.trim(), "invalid menu choice");
            console.say("❌ Invalid choice. Please enter a number between 1 and 5.")?;
            continue;
        };

        tracing::debug!(?choice, "menu choice");
        match choice {
            MenuChoice::AddBook => {
                add_book(inventory, console)?;
            }
            MenuChoice::BorrowBook => {
                borrow_book(inventory, console)?;
            }
            MenuChoice::ReturnBook => {
                return_book(inventory, console)?;
            }
            MenuChoice::DisplayInventory => display_inventory(inventory, console)?,
            MenuChoice::Exit => {
                console.say("\n👋 Thank you for using the Library System. Goodbye!")?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_five_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddBook));
        assert_eq!(MenuChoice::parse(" 4 \n"), Some(MenuChoice::DisplayInventory));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for raw in ["", "0", "6", "01", "one", "1 2", "exit"] {
            assert_eq!(MenuChoice::parse(raw), None, "{raw:?}");
        }
    }
}
