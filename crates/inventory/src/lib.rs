//! Library inventory domain module.
//!
//! This crate contains the book catalog and its lending rules, implemented
//! purely as deterministic domain logic (no IO, no console).

pub mod book;
pub mod inventory;

pub use book::{Author, BookRecord, Title};
pub use inventory::{
    AddBook, AddCopies, BookAdded, BookBorrowed, BookReturned, BorrowBook, CopiesAdded, Inventory,
    InventoryCommand, InventoryEvent, ReturnBook,
};
