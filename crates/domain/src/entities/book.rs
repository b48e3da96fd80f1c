//! Book entity - a cataloged title in one of its editions
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `BookTitle` and `AuthorName` for validated strings
//! - **Valid by construction**: `new()` takes pre-validated types
//! - **Tagged variant**: `Edition` carries the per-format data (pages vs
//!   running length) and the per-format description

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::BookId;
use crate::value_objects::{AudioLength, AuthorName, BookTitle, Edition, PageCount};

/// A single book in a library's catalog
///
/// # Invariants
///
/// - `title` and `author` are always non-empty and <= 200 characters
///   (enforced by their newtypes)
/// - A paper edition always has at least one page; an audio edition always
///   has a positive running length (enforced by `Edition`)
///
/// # Example
///
/// ```
/// use trove_domain::entities::Book;
/// use trove_domain::ids::BookId;
/// use trove_domain::value_objects::{AuthorName, BookTitle, Edition};
///
/// let title = BookTitle::new("By the Sea").unwrap();
/// let author = AuthorName::new("Pushkin").unwrap();
/// let book = Book::new(BookId::new(1), title, author, Edition::paper(26).unwrap());
///
/// assert_eq!(book.title().as_str(), "By the Sea");
/// assert_eq!(book.to_string(), r#"Paper book "By the Sea" by Pushkin, 26 pages."#);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author: AuthorName,
    edition: Edition,
}

impl Book {
    /// Create a new book.
    ///
    /// All parameters are pre-validated types - validation happens when
    /// creating them, not here.
    pub fn new(id: BookId, title: BookTitle, author: AuthorName, edition: Edition) -> Self {
        Self {
            id,
            title,
            author,
            edition,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the book's catalog number.
    #[inline]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Returns the book's title.
    #[inline]
    pub fn title(&self) -> &BookTitle {
        &self.title
    }

    /// Returns the book's author.
    #[inline]
    pub fn author(&self) -> &AuthorName {
        &self.author
    }

    /// Returns the book's edition.
    #[inline]
    pub fn edition(&self) -> &Edition {
        &self.edition
    }

    /// Returns the page count for paper editions.
    pub fn pages(&self) -> Option<PageCount> {
        self.edition.pages()
    }

    /// Returns the running length for audio editions.
    pub fn audio_length(&self) -> Option<AudioLength> {
        self.edition.audio_length()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Replace the book's title.
    pub fn set_title(&mut self, title: BookTitle) {
        self.title = title;
    }

    /// Replace the book's author.
    pub fn set_author(&mut self, author: AuthorName) {
        self.author = author;
    }

    /// Replace the book's edition (e.g. when an audio recording supersedes
    /// a print run).
    pub fn set_edition(&mut self, edition: Edition) {
        self.edition = edition;
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.edition {
            Edition::Paper { .. } => "Paper book",
            Edition::Audio { .. } => "Audiobook",
        };
        write!(
            f,
            "{} \"{}\" by {}, {}.",
            kind, self.title, self.author, self.edition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper_book() -> Book {
        Book::new(
            BookId::new(1),
            BookTitle::new("By the Sea").unwrap(),
            AuthorName::new("Pushkin").unwrap(),
            Edition::paper(26).unwrap(),
        )
    }

    fn audio_book() -> Book {
        Book::new(
            BookId::new(2),
            BookTitle::new("A Hero of Our Time").unwrap(),
            AuthorName::new("Lermontov").unwrap(),
            Edition::audio(54.97).unwrap(),
        )
    }

    #[test]
    fn fields_equal_validated_inputs() {
        let book = paper_book();
        assert_eq!(book.id(), BookId::new(1));
        assert_eq!(book.title().as_str(), "By the Sea");
        assert_eq!(book.author().as_str(), "Pushkin");
        assert_eq!(book.pages().map(PageCount::value), Some(26));
        assert_eq!(book.audio_length(), None);
    }

    #[test]
    fn audio_edition_has_length_not_pages() {
        let book = audio_book();
        assert_eq!(book.pages(), None);
        assert_eq!(book.audio_length().map(AudioLength::minutes), Some(54.97));
    }

    #[test]
    fn setters_replace_fields() {
        let mut book = paper_book();
        book.set_title(BookTitle::new("Alphabet").unwrap());
        book.set_author(AuthorName::new("Krusenstern").unwrap());
        assert_eq!(book.title().as_str(), "Alphabet");
        assert_eq!(book.author().as_str(), "Krusenstern");

        book.set_edition(Edition::audio(12.5).unwrap());
        assert!(book.pages().is_none());
    }

    #[test]
    fn display_paper_edition() {
        assert_eq!(
            paper_book().to_string(),
            r#"Paper book "By the Sea" by Pushkin, 26 pages."#
        );
    }

    #[test]
    fn display_audio_edition() {
        assert_eq!(
            audio_book().to_string(),
            r#"Audiobook "A Hero of Our Time" by Lermontov, 54.97 minutes."#
        );
    }

    #[test]
    fn serde_roundtrip() {
        for book in [paper_book(), audio_book()] {
            let json = serde_json::to_string(&book).unwrap();
            let parsed: Book = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, book);
        }
    }

    #[test]
    fn deserialize_rejects_invalid_title() {
        let json = r#"{"id":1,"title":"","author":"Pushkin","edition":{"paper":{"pages":26}}}"#;
        let result: Result<Book, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
