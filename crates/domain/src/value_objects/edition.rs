//! Book edition value objects
//!
//! An [`Edition`] says how a book is published: on paper with a page count,
//! or as an audio recording with a running length. The two variants share a
//! description capability through `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// PageCount
// ============================================================================

/// A validated page count (at least one page)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageCount(u32);

impl PageCount {
    /// Create a new validated page count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the count is zero.
    pub fn new(count: u32) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::validation("Page count must be at least 1"));
        }
        Ok(Self(count))
    }

    /// Returns the number of pages.
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PageCount {
    type Error = DomainError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<PageCount> for u32 {
    fn from(count: PageCount) -> u32 {
        count.0
    }
}

// ============================================================================
// AudioLength
// ============================================================================

/// A validated audiobook running length in minutes (finite, strictly positive)
///
/// Displays to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct AudioLength(f64);

impl AudioLength {
    /// Create a new validated running length.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the length is non-finite or not
    /// strictly positive.
    pub fn new(minutes: f64) -> Result<Self, DomainError> {
        if !minutes.is_finite() {
            return Err(DomainError::validation("Audio length must be finite"));
        }
        if minutes <= 0.0 {
            return Err(DomainError::validation(
                "Audio length must be greater than zero",
            ));
        }
        Ok(Self(minutes))
    }

    /// Returns the running length in minutes.
    #[inline]
    pub fn minutes(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AudioLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for AudioLength {
    type Error = DomainError;

    fn try_from(minutes: f64) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<AudioLength> for f64 {
    fn from(length: AudioLength) -> f64 {
        length.0
    }
}

// ============================================================================
// Edition
// ============================================================================

/// How a book is published.
///
/// A paper edition carries a page count; an audio edition carries a running
/// length. Both render a human-readable description through `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Edition {
    /// Printed on paper
    Paper { pages: PageCount },
    /// Recorded as an audiobook
    Audio { length: AudioLength },
}

impl Edition {
    /// Build a paper edition from a raw page count.
    pub fn paper(pages: u32) -> Result<Self, DomainError> {
        Ok(Self::Paper {
            pages: PageCount::new(pages)?,
        })
    }

    /// Build an audio edition from a raw length in minutes.
    pub fn audio(minutes: f64) -> Result<Self, DomainError> {
        Ok(Self::Audio {
            length: AudioLength::new(minutes)?,
        })
    }

    /// Returns the page count for paper editions.
    pub fn pages(&self) -> Option<PageCount> {
        match self {
            Self::Paper { pages } => Some(*pages),
            Self::Audio { .. } => None,
        }
    }

    /// Returns the running length for audio editions.
    pub fn audio_length(&self) -> Option<AudioLength> {
        match self {
            Self::Paper { .. } => None,
            Self::Audio { length } => Some(*length),
        }
    }

    /// Returns true for paper editions.
    pub fn is_paper(&self) -> bool {
        matches!(self, Self::Paper { .. })
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paper { pages } => write!(f, "{} pages", pages),
            Self::Audio { length } => write!(f, "{} minutes", length),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
