//! Guitar entity - a stringed instrument with a pickup flag
//!
//! String counts move in strictly positive steps and never drop below
//! zero; the electric flag just toggles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::ids::GuitarId;
use crate::value_objects::GuitarKind;

/// A guitar
///
/// # Example
///
/// ```
/// use trove_domain::entities::Guitar;
/// use trove_domain::value_objects::GuitarKind;
///
/// let kind = GuitarKind::new("balalaika").unwrap();
/// let mut guitar = Guitar::new(kind, 3, true);
///
/// assert_eq!(guitar.add_strings(4).unwrap(), 7);
/// assert!(!guitar.toggle_electric());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guitar {
    id: GuitarId,
    kind: GuitarKind,
    strings: u32,
    electric: bool,
}

impl Guitar {
    /// Create a new guitar.
    ///
    /// A zero-string guitar is allowed (it just needs restringing).
    pub fn new(kind: GuitarKind, strings: u32, electric: bool) -> Self {
        Self {
            id: GuitarId::new(),
            kind,
            strings,
            electric,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the guitar's unique identifier.
    #[inline]
    pub fn id(&self) -> GuitarId {
        self.id
    }

    /// Returns the guitar's kind.
    #[inline]
    pub fn kind(&self) -> &GuitarKind {
        &self.kind
    }

    /// Returns the current string count.
    #[inline]
    pub fn strings(&self) -> u32 {
        self.strings
    }

    /// Returns true if the guitar is electric.
    #[inline]
    pub fn is_electric(&self) -> bool {
        self.electric
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Put `count` more strings on. Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count` is zero.
    pub fn add_strings(&mut self, count: u32) -> Result<u32, DomainError> {
        if count == 0 {
            return Err(DomainError::validation(
                "Added string count must be at least 1",
            ));
        }
        self.strings = self.strings.saturating_add(count);
        Ok(self.strings)
    }

    /// Take `count` strings off, stopping at zero. Returns the new total.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `count` is zero.
    pub fn remove_strings(&mut self, count: u32) -> Result<u32, DomainError> {
        if count == 0 {
            return Err(DomainError::validation(
                "Removed string count must be at least 1",
            ));
        }
        self.strings = self.strings.saturating_sub(count);
        Ok(self.strings)
    }

    /// Flip the guitar between electric and acoustic. Returns the new flag.
    pub fn toggle_electric(&mut self) -> bool {
        self.electric = !self.electric;
        self.electric
    }
}

impl fmt::Display for Guitar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.electric {
            "Electric guitar"
        } else {
            "Acoustic guitar"
        };
        write!(f, "{} \"{}\" with {} strings", kind, self.kind, self.strings)
    }
}
