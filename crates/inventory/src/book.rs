use serde::{Deserialize, Serialize};

use libris_core::{DomainError, DomainResult, ValueObject};

fn same_text(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Book title as typed by the operator (trimmed, case preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Title(pub(crate) String);

impl Title {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against free text.
    pub fn matches(&self, other: &str) -> bool {
        same_text(&self.0, other.trim())
    }
}

impl ValueObject for Title {}

impl core::fmt::Display for Title {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Author name as typed by the operator (trimmed, case preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Author(pub(crate) String);

impl Author {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("author cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against free text.
    pub fn matches(&self, other: &str) -> bool {
        same_text(&self.0, other.trim())
    }
}

impl ValueObject for Author {}

impl core::fmt::Display for Author {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One book's title/author/copies triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub title: Title,
    pub author: Author,
    pub copies: u64,
}

impl BookRecord {
    pub fn new(title: Title, author: Author, copies: u64) -> Self {
        Self {
            title,
            author,
            copies,
        }
    }

    /// True when both title and author match, ignoring case.
    pub fn is_entry(&self, title: &str, author: &str) -> bool {
        self.title.matches(title) && self.author.matches(author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_preserves_case() {
        let title = Title::parse("  The Hobbit \n").unwrap();
        assert_eq!(title.as_str(), "The Hobbit");
    }

    #[test]
    fn parse_rejects_blank_text() {
        assert!(matches!(Title::parse("   "), Err(DomainError::Validation(_))));
        assert!(matches!(Author::parse(""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn matching_ignores_case() {
        let title = Title::parse("Pride and Prejudice").unwrap();
        assert!(title.matches("PRIDE AND PREJUDICE"));
        assert!(title.matches("pride and prejudice"));
        assert!(!title.matches("Pride & Prejudice"));
    }

    #[test]
    fn entry_requires_both_fields() {
        let record = BookRecord::new(
            Title::parse("1984").unwrap(),
            Author::parse("George Orwell").unwrap(),
            2,
        );
        assert!(record.is_entry("1984", "george orwell"));
        assert!(!record.is_entry("1984", "Aldous Huxley"));
    }
}
