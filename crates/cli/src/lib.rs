//! Interactive console for the library inventory.
//!
//! The menu loop, the four operations and the blocking input validators live
//! here; the catalog rules themselves are in `libris-inventory`.

pub mod console;
pub mod error;
pub mod menu;
pub mod operations;
pub mod validate;

pub use console::Console;
pub use error::CliError;
pub use menu::{MenuChoice, run};
pub use operations::{AddOutcome, add_book, borrow_book, display_inventory, return_book};
pub use validate::{InputError, parse_non_empty, parse_positive_integer};
