//! Health pool and armor value objects
//!
//! A [`HealthPool`] keeps a character's current health inside `[0, max]` no
//! matter what sequence of restores and depletions is applied. [`Armor`]
//! converts incoming damage into mitigated damage with a fixed non-linear
//! formula.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Damage reduction per point of armor before diminishing returns kick in.
const ARMOR_FACTOR: f64 = 0.06;

/// Round a fraction to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ============================================================================
// HealthPool
// ============================================================================

/// A bounded pool of health points.
///
/// # Invariants
///
/// - `max` is finite and non-negative
/// - `0 <= current <= max` after construction and after every operation
///
/// # Examples
///
/// ```
/// use trove_domain::value_objects::HealthPool;
///
/// let mut pool = HealthPool::new(100.0, 80.0).unwrap();
/// pool.deplete(90.0).unwrap();
/// assert_eq!(pool.current(), 0.0);
/// pool.restore(30.0).unwrap();
/// assert_eq!(pool.current(), 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawHealthPool", into = "RawHealthPool")]
pub struct HealthPool {
    current: f64,
    max: f64,
}

/// Unvalidated wire form of [`HealthPool`]; deserialization re-validates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHealthPool {
    current: f64,
    max: f64,
}

impl HealthPool {
    /// Create a new health pool.
    ///
    /// A zero-sized pool is allowed (e.g. intangible service characters).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - Either value is non-finite
    /// - `max` is negative
    /// - `current` is below zero or above `max`
    pub fn new(max: f64, current: f64) -> Result<Self, DomainError> {
        if !max.is_finite() {
            return Err(DomainError::validation("Maximum health must be finite"));
        }
        if max < 0.0 {
            return Err(DomainError::validation(
                "Maximum health must be zero or greater",
            ));
        }
        if !current.is_finite() {
            return Err(DomainError::validation("Current health must be finite"));
        }
        if current < 0.0 || current > max {
            return Err(DomainError::validation(format!(
                "Current health must be between 0 and {}",
                max
            )));
        }
        Ok(Self { current, max })
    }

    /// Create a pool filled to its maximum.
    pub fn full(max: f64) -> Result<Self, DomainError> {
        Self::new(max, max)
    }

    /// Returns the current health.
    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns the maximum health.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true if the pool is drained to zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current == 0.0
    }

    /// Returns true if the pool is at its maximum.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Raise current health by `amount`, capped at the maximum.
    ///
    /// Returns the amount actually restored, which is smaller than `amount`
    /// when the cap cuts it short.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is non-finite or not
    /// strictly positive.
    pub fn restore(&mut self, amount: f64) -> Result<f64, DomainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::validation(
                "Restored health must be a finite, strictly positive amount",
            ));
        }
        let before = self.current;
        self.current = (self.current + amount).min(self.max);
        Ok(self.current - before)
    }

    /// Lower current health by `amount`, floored at zero.
    ///
    /// Returns the amount actually lost, which is smaller than `amount`
    /// when the floor cuts it short.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is non-finite or not
    /// strictly positive.
    pub fn deplete(&mut self, amount: f64) -> Result<f64, DomainError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(DomainError::validation(
                "Depleted health must be a finite, strictly positive amount",
            ));
        }
        let before = self.current;
        self.current = (self.current - amount).max(0.0);
        Ok(before - self.current)
    }
}

impl fmt::Display for HealthPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}

impl TryFrom<RawHealthPool> for HealthPool {
    type Error = DomainError;

    fn try_from(raw: RawHealthPool) -> Result<Self, Self::Error> {
        Self::new(raw.max, raw.current)
    }
}

impl From<HealthPool> for RawHealthPool {
    fn from(pool: HealthPool) -> Self {
        Self {
            current: pool.current,
            max: pool.max,
        }
    }
}

// ============================================================================
// Armor
// ============================================================================

/// A non-negative armor rating.
///
/// Each point of armor shaves off a diminishing share of incoming damage:
/// `mitigation = armor * 0.06 / (1 + armor * 0.06)`, rounded to two
/// decimals. The formula never reaches 100%, so armor alone cannot make a
/// character invulnerable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Armor(f64);

impl Armor {
    /// Create a new armor rating.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the rating is non-finite or
    /// negative.
    pub fn new(rating: f64) -> Result<Self, DomainError> {
        if !rating.is_finite() {
            return Err(DomainError::validation("Armor rating must be finite"));
        }
        if rating < 0.0 {
            return Err(DomainError::validation(
                "Armor rating must be zero or greater",
            ));
        }
        Ok(Self(rating))
    }

    /// No armor at all.
    pub fn none() -> Self {
        Self(0.0)
    }

    /// Returns the raw rating.
    #[inline]
    pub fn rating(&self) -> f64 {
        self.0
    }

    /// The fraction of incoming damage this armor absorbs, in `[0, 1)`.
    pub fn mitigation(&self) -> f64 {
        round2(self.0 * ARMOR_FACTOR / (1.0 + self.0 * ARMOR_FACTOR))
    }

    /// Reduce a raw damage amount by this armor's mitigation.
    pub fn absorb(&self, raw_damage: f64) -> f64 {
        raw_damage - raw_damage * self.mitigation()
    }
}

impl Default for Armor {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for Armor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Armor {
    type Error = DomainError;

    fn try_from(rating: f64) -> Result<Self, Self::Error> {
        Self::new(rating)
    }
}

impl From<Armor> for f64 {
    fn from(armor: Armor) -> f64 {
        armor.0
    }
}

// ============================================================================
// Tests
// ============================================================================
