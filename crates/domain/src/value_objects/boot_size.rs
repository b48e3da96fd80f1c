//! Boot size value object
//!
//! Sizes follow the European footwear scale and are only sold between 16
//! and 60. Construction rejects out-of-range sizes; adjustments clamp.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A boot size in the closed range `[16, 60]`.
///
/// # Examples
///
/// ```
/// use trove_domain::value_objects::BootSize;
///
/// let size = BootSize::new(36.0).unwrap();
/// assert_eq!(size.adjusted_by(5.0).value(), 41.0);
/// assert_eq!(size.adjusted_by(-100.0).value(), BootSize::MIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BootSize(f64);

impl BootSize {
    /// Smallest size on sale.
    pub const MIN: f64 = 16.0;
    /// Largest size on sale.
    pub const MAX: f64 = 60.0;

    /// Create a new boot size.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the size is non-finite or
    /// outside `[16, 60]`.
    pub fn new(size: f64) -> Result<Self, DomainError> {
        if !size.is_finite() {
            return Err(DomainError::validation("Boot size must be finite"));
        }
        if !(Self::MIN..=Self::MAX).contains(&size) {
            return Err(DomainError::validation(format!(
                "Boot size must be between {} and {}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(size))
    }

    /// Returns the size value.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// The size shifted by `delta`, clamped to `[16, 60]`.
    ///
    /// The delta may be positive or negative; the result is always a valid
    /// size.
    pub fn adjusted_by(self, delta: f64) -> Self {
        Self((self.0 + delta).clamp(Self::MIN, Self::MAX))
    }
}

impl fmt::Display for BootSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for BootSize {
    type Error = DomainError;

    fn try_from(size: f64) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BootSize> for f64 {
    fn from(size: BootSize) -> f64 {
        size.0
    }
}
