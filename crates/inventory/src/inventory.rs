use serde::{Deserialize, Serialize};

use libris_core::{Aggregate, DomainError};

use crate::book::{Author, BookRecord, Title};

/// Aggregate root: the ordered catalog of book records.
///
/// Records are appended in insertion order and never removed, so a record's
/// position is a stable handle for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    books: Vec<BookRecord>,
    version: u64,
}

impl Inventory {
    /// An inventory with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog every session starts with.
    pub fn seeded() -> Self {
        let seed = [
            ("The Hitchhiker's Guide to the Galaxy", "Douglas Adams", 3),
            ("Pride and Prejudice", "Jane Austen", 5),
            ("1984", "George Orwell", 2),
        ];
        let books = seed
            .into_iter()
            .map(|(title, author, copies)| BookRecord {
                title: Title(title.to_string()),
                author: Author(author.to_string()),
                copies,
            })
            .collect();
        Self { books, version: 0 }
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&BookRecord> {
        self.books.get(position)
    }

    /// First record whose title and author both match, ignoring case.
    pub fn find_entry(&self, title: &str, author: &str) -> Option<(usize, &BookRecord)> {
        self.books
            .iter()
            .enumerate()
            .find(|(_, book)| book.is_entry(title, author))
    }

    /// First record whose title matches, ignoring case and author.
    ///
    /// With two records sharing a title this always resolves to the earlier one.
    pub fn find_by_title(&self, title: &str) -> Option<(usize, &BookRecord)> {
        self.books
            .iter()
            .enumerate()
            .find(|(_, book)| book.title.matches(title))
    }
}

/// Command: AddBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBook {
    pub title: Title,
    pub author: Author,
    pub copies: u64,
}

/// Command: AddCopies (to an existing title/author entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddCopies {
    pub title: Title,
    pub author: Author,
    pub copies: u64,
}

/// Command: BorrowBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BorrowBook {
    pub title: Title,
}

/// Command: ReturnBook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReturnBook {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddBook(AddBook),
    AddCopies(AddCopies),
    BorrowBook(BorrowBook),
    ReturnBook(ReturnBook),
}

/// Event: BookAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookAdded {
    pub position: usize,
    pub title: Title,
    pub author: Author,
    pub copies: u64,
}

/// Event: CopiesAdded. `copies` is the resulting total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopiesAdded {
    pub position: usize,
    pub added: u64,
    pub copies: u64,
}

/// Event: BookBorrowed. `remaining` is the count left on the shelf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookBorrowed {
    pub position: usize,
    pub remaining: u64,
}

/// Event: BookReturned. `copies` is the resulting total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookReturned {
    pub position: usize,
    pub copies: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryEvent {
    BookAdded(BookAdded),
    CopiesAdded(CopiesAdded),
    BookBorrowed(BookBorrowed),
    BookReturned(BookReturned),
}

impl InventoryEvent {
    /// Stable event name (e.g. "inventory.book.borrowed").
    pub fn event_type(&self) -> &'static str {
        match self {
            InventoryEvent::BookAdded(_) => "inventory.book.added",
            InventoryEvent::CopiesAdded(_) => "inventory.book.copies_added",
            InventoryEvent::BookBorrowed(_) => "inventory.book.borrowed",
            InventoryEvent::BookReturned(_) => "inventory.book.returned",
        }
    }

    /// Position of the record the event touched.
    pub fn position(&self) -> usize {
        match self {
            InventoryEvent::BookAdded(e) => e.position,
            InventoryEvent::CopiesAdded(e) => e.position,
            InventoryEvent::BookBorrowed(e) => e.position,
            InventoryEvent::BookReturned(e) => e.position,
        }
    }
}

impl Aggregate for Inventory {
    type Command = InventoryCommand;
    type Event = InventoryEvent;
    type Error = DomainError;

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) {
        match event {
            InventoryEvent::BookAdded(e) => {
                self.books.push(BookRecord::new(
                    e.title.clone(),
                    e.author.clone(),
                    e.copies,
                ));
            }
            InventoryEvent::CopiesAdded(e) => self.set_copies(e.position, e.copies),
            InventoryEvent::BookBorrowed(e) => self.set_copies(e.position, e.remaining),
            InventoryEvent::BookReturned(e) => self.set_copies(e.position, e.copies),
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            InventoryCommand::AddBook(cmd) => self.handle_add_book(cmd),
            InventoryCommand::AddCopies(cmd) => self.handle_add_copies(cmd),
            InventoryCommand::BorrowBook(cmd) => self.handle_borrow(cmd),
            InventoryCommand::ReturnBook(cmd) => self.handle_return(cmd),
        }
    }
}

impl Inventory {
    fn set_copies(&mut self, position: usize, copies: u64) {
        if let Some(book) = self.books.get_mut(position) {
            book.copies = copies;
        }
    }

    fn ensure_positive(copies: u64) -> Result<(), DomainError> {
        if copies == 0 {
            return Err(DomainError::validation("copies must be a positive integer"));
        }
        Ok(())
    }

    fn handle_add_book(&self, cmd: &AddBook) -> Result<Vec<InventoryEvent>, DomainError> {
        Self::ensure_positive(cmd.copies)?;
        if self
            .find_entry(cmd.title.as_str(), cmd.author.as_str())
            .is_some()
        {
            return Err(DomainError::conflict(format!(
                "'{}' by {} already exists",
                cmd.title, cmd.author
            )));
        }

        Ok(vec![InventoryEvent::BookAdded(BookAdded {
            position: self.books.len(),
            title: cmd.title.clone(),
            author: cmd.author.clone(),
            copies: cmd.copies,
        })])
    }

    fn handle_add_copies(&self, cmd: &AddCopies) -> Result<Vec<InventoryEvent>, DomainError> {
        Self::ensure_positive(cmd.copies)?;
        let (position, book) = self
            .find_entry(cmd.title.as_str(), cmd.author.as_str())
            .ok_or_else(|| DomainError::not_found(cmd.title.as_str()))?;

        let copies = book
            .copies
            .checked_add(cmd.copies)
            .ok_or_else(|| DomainError::invariant("copy count overflow"))?;

        Ok(vec![InventoryEvent::CopiesAdded(CopiesAdded {
            position,
            added: cmd.copies,
            copies,
        })])
    }

    fn handle_borrow(&self, cmd: &BorrowBook) -> Result<Vec<InventoryEvent>, DomainError> {
        let (position, book) = self
            .find_by_title(cmd.title.as_str())
            .ok_or_else(|| DomainError::not_found(cmd.title.as_str()))?;

        if book.copies == 0 {
            return Err(DomainError::unavailable(book.title.as_str()));
        }

        Ok(vec![InventoryEvent::BookBorrowed(BookBorrowed {
            position,
            remaining: book.copies - 1,
        })])
    }

    fn handle_return(&self, cmd: &ReturnBook) -> Result<Vec<InventoryEvent>, DomainError> {
        let (position, book) = self
            .find_by_title(cmd.title.as_str())
            .ok_or_else(|| DomainError::not_found(cmd.title.as_str()))?;

        let copies = book
            .copies
            .checked_add(1)
            .ok_or_else(|| DomainError::invariant("copy count overflow"))?;

        Ok(vec![InventoryEvent::BookReturned(BookReturned {
            position,
            copies,
        })])
    }
}
