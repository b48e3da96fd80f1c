//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace
//!
//! The catalog vocabulary types (`StyleName`, `ColorName`) are additionally
//! lowercased so membership checks are case-insensitive.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for name fields (BookTitle, AuthorName, CharacterName, GuitarKind)
const MAX_NAME_LENGTH: usize = 200;

/// Maximum length for catalog vocabulary entries (StyleName, ColorName)
const MAX_VOCAB_LENGTH: usize = 50;

// ============================================================================
// BookTitle
// ============================================================================

/// A validated book title (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BookTitle(String);

impl BookTitle {
    /// Create a new validated book title.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The title is empty after trimming
    /// - The title exceeds 200 characters after trimming
    pub fn new(title: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Book title cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Book title cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for BookTitle {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<BookTitle> for String {
    fn from(title: BookTitle) -> String {
        title.0
    }
}

// ============================================================================
// AuthorName
// ============================================================================

/// A validated author name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
    /// Create a new validated author name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Author name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Author name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for AuthorName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<AuthorName> for String {
    fn from(name: AuthorName) -> String {
        name.0
    }
}

// ============================================================================
// CharacterName
// ============================================================================

/// A validated character name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

// ============================================================================
// GuitarKind
// ============================================================================

/// A validated guitar kind, e.g. "balalaika" or "twelve-string"
/// (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GuitarKind(String);

impl GuitarKind {
    /// Create a new validated guitar kind.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The kind is empty after trimming
    /// - The kind exceeds 200 characters after trimming
    pub fn new(kind: impl Into<String>) -> Result<Self, DomainError> {
        let kind = kind.into();
        let trimmed = kind.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Guitar kind cannot be empty"));
        }
        if trimmed.len() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Guitar kind cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the kind as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GuitarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GuitarKind {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<GuitarKind> for String {
    fn from(kind: GuitarKind) -> String {
        kind.0
    }
}

// ============================================================================
// StyleName
// ============================================================================

/// A validated boot style entry (non-empty, <=50 chars, trimmed, lowercase)
///
/// Style names live in the [`GearCatalog`](crate::aggregates::GearCatalog)
/// allowed-set. They are lowercased for consistent comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StyleName(String);

impl StyleName {
    /// Create a new validated style name.
    ///
    /// The name is trimmed and converted to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim().to_lowercase();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Style name cannot be empty"));
        }
        if trimmed.len() > MAX_VOCAB_LENGTH {
            return Err(DomainError::validation(format!(
                "Style name cannot exceed {} characters",
                MAX_VOCAB_LENGTH
            )));
        }
        Ok(Self(trimmed))
    }

    /// Returns the style name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for StyleName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<StyleName> for String {
    fn from(name: StyleName) -> String {
        name.0
    }
}

// ============================================================================
// ColorName
// ============================================================================

/// A validated boot color entry (non-empty, <=50 chars, trimmed, lowercase)
///
/// Color names live in the [`GearCatalog`](crate::aggregates::GearCatalog)
/// allowed-set. They are lowercased for consistent comparison.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorName(String);

impl ColorName {
    /// Create a new validated color name.
    ///
    /// The name is trimmed and converted to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 50 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim().to_lowercase();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Color name cannot be empty"));
        }
        if trimmed.len() > MAX_VOCAB_LENGTH {
            return Err(DomainError::validation(format!(
                "Color name cannot exceed {} characters",
                MAX_VOCAB_LENGTH
            )));
        }
        Ok(Self(trimmed))
    }

    /// Returns the color name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ColorName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ColorName> for String {
    fn from(name: ColorName) -> String {
        name.0
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    mod book_title {
        use super::*;

        #[test]
        fn valid_title() {
            let title = BookTitle::new("The Primer").unwrap();
            assert_eq!(title.as_str(), "The Primer");
            assert_eq!(title.to_string(), "The Primer");
        }

        #[test]
        fn empty_title_rejected() {
            let result = BookTitle::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn whitespace_only_rejected() {
            assert!(BookTitle::new("   ").is_err());
        }

        #[test]
        fn title_is_trimmed() {
            let title = BookTitle::new("  By the Sea  ").unwrap();
            assert_eq!(title.as_str(), "By the Sea");
        }

        #[test]
        fn too_long_rejected() {
            let result = BookTitle::new("a".repeat(201));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("200"));
        }

        #[test]
        fn max_length_accepted() {
            let title = BookTitle::new("a".repeat(200)).unwrap();
            assert_eq!(title.as_str().len(), 200);
        }

        #[test]
        fn try_from_string() {
            let title: BookTitle = "Alphabet".to_string().try_into().unwrap();
            assert_eq!(title.as_str(), "Alphabet");
        }

        #[test]
        fn into_string() {
            let title = BookTitle::new("Alphabet").unwrap();
            let s: String = title.into();
            assert_eq!(s, "Alphabet");
        }
    }

    mod author_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = AuthorName::new("Krusenstern").unwrap();
            assert_eq!(name.as_str(), "Krusenstern");
        }

        #[test]
        fn empty_name_rejected() {
            let result = AuthorName::new("");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("cannot be empty"));
        }

        #[test]
        fn name_is_trimmed() {
            let name = AuthorName::new("  Lermontov  ").unwrap();
            assert_eq!(name.as_str(), "Lermontov");
        }

        #[test]
        fn too_long_rejected() {
            assert!(AuthorName::new("a".repeat(201)).is_err());
        }
    }

    mod character_name {
        use super::*;

        #[test]
        fn valid_name() {
            let name = CharacterName::new("Sharik").unwrap();
            assert_eq!(name.as_str(), "Sharik");
            assert_eq!(name.to_string(), "Sharik");
        }

        #[test]
        fn empty_name_rejected() {
            let result = CharacterName::new("");
            assert!(result.is_err());
            let err = result.unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }

        #[test]
        fn name_is_trimmed() {
            let name = CharacterName::new("  Matroskin  ").unwrap();
            assert_eq!(name.as_str(), "Matroskin");
        }

        #[test]
        fn too_long_rejected() {
            let result = CharacterName::new("a".repeat(201));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("200"));
        }

        #[test]
        fn clone_preserves_name() {
            let name = CharacterName::new("Vasya").unwrap();
            let cloned = name.clone();
            assert_eq!(cloned.as_str(), "Vasya");
        }
    }

    mod guitar_kind {
        use super::*;

        #[test]
        fn valid_kind() {
            let kind = GuitarKind::new("balalaika").unwrap();
            assert_eq!(kind.as_str(), "balalaika");
        }

        #[test]
        fn empty_kind_rejected() {
            assert!(GuitarKind::new("").is_err());
        }

        #[test]
        fn kind_is_trimmed() {
            let kind = GuitarKind::new("  seven-string  ").unwrap();
            assert_eq!(kind.as_str(), "seven-string");
        }

        #[test]
        fn too_long_rejected() {
            assert!(GuitarKind::new("a".repeat(201)).is_err());
        }
    }

    mod style_name {
        use super::*;

        #[test]
        fn valid_style() {
            let style = StyleName::new("sneakers").unwrap();
            assert_eq!(style.as_str(), "sneakers");
        }

        #[test]
        fn empty_style_rejected() {
            let result = StyleName::new("");
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("cannot be empty"));
        }

        #[test]
        fn style_is_trimmed_and_lowercased() {
            let style = StyleName::new("  Dress Shoes  ").unwrap();
            assert_eq!(style.as_str(), "dress shoes");
        }

        #[test]
        fn too_long_rejected() {
            let result = StyleName::new("a".repeat(51));
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("50"));
        }

        #[test]
        fn max_length_accepted() {
            let style = StyleName::new("a".repeat(50)).unwrap();
            assert_eq!(style.as_str().len(), 50);
        }
    }

    mod color_name {
        use super::*;

        #[test]
        fn valid_color() {
            let color = ColorName::new("purple").unwrap();
            assert_eq!(color.as_str(), "purple");
        }

        #[test]
        fn empty_color_rejected() {
            assert!(ColorName::new("").is_err());
        }

        #[test]
        fn color_is_lowercased() {
            let color = ColorName::new("BLACK").unwrap();
            assert_eq!(color.as_str(), "black");
        }

        #[test]
        fn too_long_rejected() {
            assert!(ColorName::new("a".repeat(51)).is_err());
        }
    }
}
