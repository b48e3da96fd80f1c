//! Character entity - a named combatant with bounded health and armor
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: All fields are encapsulated
//! - **Newtypes**: `CharacterName`, `HealthPool`, `Armor` for validated data
//! - **Domain events**: Mutations return outcome enums (`DamageOutcome`,
//!   `HealOutcome`) inside a `Result`
//! - **Valid by construction**: `new()` takes pre-validated types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::events::{DamageOutcome, HealOutcome};
use crate::ids::CharacterId;
use crate::value_objects::{Armor, CharacterName, HealthPool};

/// A game character
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by
///   `CharacterName`)
/// - health stays within `[0, max]` after any sequence of mutations
///   (enforced by `HealthPool`)
/// - armor is never negative (enforced by `Armor`)
///
/// # Example
///
/// ```
/// use trove_domain::entities::Character;
/// use trove_domain::events::DamageOutcome;
/// use trove_domain::value_objects::{Armor, CharacterName, HealthPool};
///
/// let name = CharacterName::new("Sharik").unwrap();
/// let health = HealthPool::new(100.0, 80.0).unwrap();
/// let mut character = Character::new(name, health, Armor::new(10.0).unwrap());
///
/// match character.take_damage(10.0).unwrap() {
///     DamageOutcome::Wounded { remaining_health, .. } => {
///         assert!((remaining_health - 73.7).abs() < 1e-9);
///     }
///     _ => panic!("Expected Wounded outcome"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: CharacterId,
    name: CharacterName,
    health: HealthPool,
    armor: Armor,
}

impl Character {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new character.
    ///
    /// All parameters are pre-validated types - validation happens when
    /// creating them, not here.
    pub fn new(name: CharacterName, health: HealthPool, armor: Armor) -> Self {
        Self {
            id: CharacterId::new(),
            name,
            health,
            armor,
        }
    }

    /// Set the character's ID (used when loading from storage).
    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the character's unique identifier.
    #[inline]
    pub fn id(&self) -> CharacterId {
        self.id
    }

    /// Returns the character's name.
    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    /// Returns the character's health pool.
    #[inline]
    pub fn health(&self) -> &HealthPool {
        &self.health
    }

    /// Returns the character's armor rating.
    #[inline]
    pub fn armor(&self) -> Armor {
        self.armor
    }

    /// Returns true if the character's health is drained to zero.
    #[inline]
    pub fn is_downed(&self) -> bool {
        self.health.is_empty()
    }

    // =========================================================================
    // Mutation Methods (return domain events)
    // =========================================================================

    /// Heal the character.
    ///
    /// Returns a `HealOutcome` indicating what happened:
    /// - `AlreadyFull` if the character was at max health
    /// - `Healed` with the actual amount restored (capped at max health)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is non-finite or not
    /// strictly positive.
    pub fn heal(&mut self, amount: f64) -> Result<HealOutcome, DomainError> {
        if self.health.is_full() {
            // Validate even when nothing changes so bad amounts never pass
            // silently.
            if !amount.is_finite() || amount <= 0.0 {
                return Err(DomainError::validation(
                    "Restored health must be a finite, strictly positive amount",
                ));
            }
            return Ok(HealOutcome::AlreadyFull);
        }
        let amount_healed = self.health.restore(amount)?;
        Ok(HealOutcome::Healed {
            amount_healed,
            new_health: self.health.current(),
        })
    }

    /// Apply damage that has already been through mitigation.
    ///
    /// Health floors at zero. Returns a `DamageOutcome` indicating what
    /// happened:
    /// - `Wounded` if the character took damage but is still standing
    /// - `Downed` if this damage drained health to zero
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `amount` is non-finite or not
    /// strictly positive.
    pub fn take_raw_damage(&mut self, amount: f64) -> Result<DamageOutcome, DomainError> {
        let damage_dealt = self.health.deplete(amount)?;
        if self.health.is_empty() {
            Ok(DamageOutcome::Downed { damage_dealt })
        } else {
            Ok(DamageOutcome::Wounded {
                damage_dealt,
                remaining_health: self.health.current(),
            })
        }
    }

    /// Apply an enemy hit, reduced by the character's armor.
    ///
    /// The armor's mitigation share is taken off `enemy_damage` before the
    /// remainder is applied to health.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `enemy_damage` is non-finite or
    /// not strictly positive.
    pub fn take_damage(&mut self, enemy_damage: f64) -> Result<DamageOutcome, DomainError> {
        if !enemy_damage.is_finite() || enemy_damage <= 0.0 {
            return Err(DomainError::validation(
                "Enemy damage must be a finite, strictly positive amount",
            ));
        }
        self.take_raw_damage(self.armor.absorb(enemy_damage))
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Rename the character.
    pub fn set_name(&mut self, name: CharacterName) {
        self.name = name;
    }

    /// Replace the character's armor rating.
    pub fn set_armor(&mut self, armor: Armor) {
        self.armor = armor;
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Character \"{}\": {} health, armor {}",
            self.name, self.health, self.armor
        )
    }
}
