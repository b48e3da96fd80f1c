//! Library aggregate - the owning collection of cataloged books
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: the book list is only reachable through methods
//! - **Catalog numbers**: the library hands out sequential [`BookId`]s,
//!   always one past the highest number in use
//! - **Valid by construction**: deserialization re-checks that catalog
//!   numbers are unique

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Book;
use crate::error::DomainError;
use crate::ids::BookId;
use crate::value_objects::{AuthorName, BookTitle, Edition};

/// A library of books
///
/// # Invariants
///
/// - No two books share a catalog number
///
/// # Example
///
/// ```
/// use trove_domain::aggregates::Library;
/// use trove_domain::ids::BookId;
/// use trove_domain::value_objects::{AuthorName, BookTitle, Edition};
///
/// let mut library = Library::new();
/// assert_eq!(library.next_book_id(), BookId::FIRST);
///
/// let id = library.accession(
///     BookTitle::new("Alphabet").unwrap(),
///     AuthorName::new("Krusenstern").unwrap(),
///     Edition::paper(120).unwrap(),
/// );
/// assert_eq!(id, BookId::new(1));
/// assert_eq!(library.next_book_id(), BookId::new(2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLibrary", into = "RawLibrary")]
pub struct Library {
    books: Vec<Book>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Unvalidated wire form of [`Library`]; deserialization re-validates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLibrary {
    books: Vec<Book>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Library {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Create an empty library.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            books: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a library over an existing book list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if two books share a catalog
    /// number.
    pub fn from_books(books: Vec<Book>) -> Result<Self, DomainError> {
        for (index, book) in books.iter().enumerate() {
            if books[..index].iter().any(|b| b.id() == book.id()) {
                return Err(DomainError::constraint(format!(
                    "Catalog number {} is assigned to more than one book",
                    book.id()
                )));
            }
        }
        let now = Utc::now();
        Ok(Self {
            books,
            created_at: now,
            updated_at: now,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the books in accession order.
    #[inline]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Returns the number of books held.
    #[inline]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Returns true if the library holds no books.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns when the library was created.
    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the library last changed.
    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // =========================================================================
    // Catalog numbering
    // =========================================================================

    /// The catalog number the next accession will get.
    ///
    /// One past the highest number in use; [`BookId::FIRST`] for an empty
    /// library.
    pub fn next_book_id(&self) -> BookId {
        self.books
            .iter()
            .map(Book::id)
            .max()
            .map_or(BookId::FIRST, BookId::next)
    }

    /// The position of the book with the given catalog number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no book carries the number.
    pub fn position_of(&self, id: BookId) -> Result<usize, DomainError> {
        self.books
            .iter()
            .position(|book| book.id() == id)
            .ok_or_else(|| DomainError::not_found("Book", id.to_string()))
    }

    /// The book with the given catalog number, if any.
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id() == id)
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Shelve a book that already carries a catalog number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Constraint` if the number is already in use.
    pub fn shelve(&mut self, book: Book) -> Result<(), DomainError> {
        if self.book(book.id()).is_some() {
            return Err(DomainError::constraint(format!(
                "Catalog number {} is already in use",
                book.id()
            )));
        }
        self.books.push(book);
        self.touch();
        Ok(())
    }

    /// Accession a new title: build the book, assign the next catalog
    /// number, and shelve it. Returns the assigned number.
    pub fn accession(&mut self, title: BookTitle, author: AuthorName, edition: Edition) -> BookId {
        let id = self.next_book_id();
        self.books.push(Book::new(id, title, author, edition));
        self.touch();
        id
    }

    /// Remove and return the book with the given catalog number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if no book carries the number.
    pub fn remove(&mut self, id: BookId) -> Result<Book, DomainError> {
        let position = self.position_of(id)?;
        let book = self.books.remove(position);
        self.touch();
        Ok(book)
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<RawLibrary> for Library {
    type Error = DomainError;

    fn try_from(raw: RawLibrary) -> Result<Self, Self::Error> {
        let mut library = Self::from_books(raw.books)?;
        library.created_at = raw.created_at;
        library.updated_at = raw.updated_at;
        Ok(library)
    }
}

impl From<Library> for RawLibrary {
    fn from(library: Library) -> Self {
        Self {
            books: library.books,
            created_at: library.created_at,
            updated_at: library.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: u32, title: &str) -> Book {
        Book::new(
            BookId::new(id),
            BookTitle::new(title).unwrap(),
            AuthorName::new("Test Author").unwrap(),
            Edition::paper(200).unwrap(),
        )
    }

    mod numbering {
        use super::*;

        #[test]
        fn empty_library_starts_at_one() {
            let library = Library::new();
            assert!(library.is_empty());
            assert_eq!(library.next_book_id(), BookId::FIRST);
        }

        #[test]
        fn next_id_is_one_past_the_maximum() {
            let library =
                Library::from_books(vec![book(1, "First"), book(2, "Second")]).unwrap();
            assert_eq!(library.next_book_id(), BookId::new(3));
        }

        #[test]
        fn next_id_skips_gaps() {
            // Numbers need not be contiguous; only the maximum matters
            let library =
                Library::from_books(vec![book(3, "Third"), book(41, "Late")]).unwrap();
            assert_eq!(library.next_book_id(), BookId::new(42));
        }
    }

    mod lookup {
        use super::*;

        #[test]
        fn position_of_present_book() {
            let library =
                Library::from_books(vec![book(1, "First"), book(2, "Second")]).unwrap();
            assert_eq!(library.position_of(BookId::new(1)).unwrap(), 0);
            assert_eq!(library.position_of(BookId::new(2)).unwrap(), 1);
        }

        #[test]
        fn position_of_absent_book_is_not_found() {
            let library = Library::from_books(vec![book(1, "First")]).unwrap();
            let err = library.position_of(BookId::new(9)).unwrap_err();
            assert!(matches!(err, DomainError::NotFound { .. }));
            assert!(err.to_string().contains("9"));
        }

        #[test]
        fn book_by_id() {
            let library = Library::from_books(vec![book(1, "First")]).unwrap();
            assert_eq!(
                library.book(BookId::new(1)).map(|b| b.title().as_str()),
                Some("First")
            );
            assert!(library.book(BookId::new(2)).is_none());
        }
    }

    mod mutation {
        use super::*;

        #[test]
        fn shelve_adds_book() {
            let mut library = Library::new();
            library.shelve(book(7, "Lone")).unwrap();
            assert_eq!(library.len(), 1);
            assert_eq!(library.next_book_id(), BookId::new(8));
        }

        #[test]
        fn add_rejects_duplicate_catalog_number() {
            let mut library = Library::from_books(vec![book(1, "First")]).unwrap();
            let err = library.shelve(book(1, "Impostor")).unwrap_err();
            assert!(matches!(err, DomainError::Constraint(_)));
            assert_eq!(library.len(), 1);
        }

        #[test]
        fn accession_assigns_sequential_numbers() {
            let mut library = Library::new();
            let first = library.accession(
                BookTitle::new("Alphabet").unwrap(),
                AuthorName::new("Krusenstern").unwrap(),
                Edition::paper(120).unwrap(),
            );
            let second = library.accession(
                BookTitle::new("A Hero of Our Time").unwrap(),
                AuthorName::new("Lermontov").unwrap(),
                Edition::audio(54.97).unwrap(),
            );
            assert_eq!(first, BookId::new(1));
            assert_eq!(second, BookId::new(2));
            assert_eq!(library.len(), 2);
        }

        #[test]
        fn remove_returns_the_book() {
            let mut library =
                Library::from_books(vec![book(1, "First"), book(2, "Second")]).unwrap();
            let removed = library.remove(BookId::new(1)).unwrap();
            assert_eq!(removed.title().as_str(), "First");
            assert_eq!(library.len(), 1);
            assert!(library.position_of(BookId::new(1)).is_err());
        }

        #[test]
        fn remove_absent_book_is_not_found() {
            let mut library = Library::new();
            assert!(matches!(
                library.remove(BookId::new(1)),
                Err(DomainError::NotFound { .. })
            ));
        }

        #[test]
        fn mutations_refresh_updated_at() {
            let mut library = Library::new();
            let before = library.updated_at();
            library.shelve(book(1, "First")).unwrap();
            assert!(library.updated_at() >= before);
            assert!(library.updated_at() >= library.created_at());
        }
    }

    mod construction {
        use super::*;

        #[test]
        fn from_books_rejects_duplicate_numbers() {
            let result = Library::from_books(vec![book(1, "First"), book(1, "Impostor")]);
            assert!(matches!(result, Err(DomainError::Constraint(_))));
        }

        #[test]
        fn default_is_empty() {
            assert!(Library::default().is_empty());
        }
    }

    mod serde {
        use super::*;

        #[test]
        fn roundtrip_preserves_library() {
            let library =
                Library::from_books(vec![book(1, "First"), book(2, "Second")]).unwrap();
            let json = serde_json::to_string(&library).unwrap();
            let parsed: Library = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, library);
        }

        #[test]
        fn deserialize_rejects_duplicate_numbers() {
            let library = Library::from_books(vec![book(1, "First")]).unwrap();
            let mut json = serde_json::to_value(&library).unwrap();
            let duplicate = json["books"][0].clone();
            json["books"]
                .as_array_mut()
                .expect("books is an array")
                .push(duplicate);
            let result: Result<Library, _> = serde_json::from_value(json);
            assert!(result.is_err());
        }
    }
}
