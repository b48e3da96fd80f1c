//! Character-related domain events
//!
//! These enums communicate what happened when character health was
//! modified, allowing callers to react appropriately.

use serde::{Deserialize, Serialize};

/// Outcome of applying damage to a character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DamageOutcome {
    /// Character took damage but is still standing
    Wounded {
        damage_dealt: f64,
        remaining_health: f64,
    },
    /// This damage drained the character's health to zero
    Downed { damage_dealt: f64 },
}

impl DamageOutcome {
    /// The health actually removed by the hit.
    pub fn damage_dealt(&self) -> f64 {
        match self {
            Self::Wounded { damage_dealt, .. } | Self::Downed { damage_dealt } => *damage_dealt,
        }
    }

    /// Returns true if the character went down.
    pub fn is_downed(&self) -> bool {
        matches!(self, Self::Downed { .. })
    }
}

/// Outcome of healing a character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealOutcome {
    /// Health rose by `amount_healed`, possibly capped at the maximum
    Healed { amount_healed: f64, new_health: f64 },
    /// Character was already at full health
    AlreadyFull,
}
