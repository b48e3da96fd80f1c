//! Gear-related domain events

use serde::{Deserialize, Serialize};

use crate::value_objects::BootSize;

/// Outcome of adjusting a boot's size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizeAdjustment {
    /// Size before the adjustment
    pub from: BootSize,
    /// Size after the adjustment
    pub to: BootSize,
}

impl SizeAdjustment {
    /// Returns true if the requested delta ran into the size range and was
    /// cut short.
    pub fn was_clamped(&self, requested_delta: f64) -> bool {
        (self.to.value() - self.from.value() - requested_delta).abs() > f64::EPSILON
    }
}
