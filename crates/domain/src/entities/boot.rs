//! Boot entity - footwear validated against the gear catalog
//!
//! A boot's style and color must be present in the owning
//! [`GearCatalog`](crate::aggregates::GearCatalog) at construction time and
//! whenever they change. The catalog is passed by reference; removing an
//! entry from it later does not touch boots already made.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregates::GearCatalog;
use crate::error::DomainError;
use crate::events::SizeAdjustment;
use crate::ids::BootId;
use crate::value_objects::{BootSize, ColorName, StyleName};

/// A single boot
///
/// # Invariants
///
/// - `size` is always within `[16, 60]` (enforced by `BootSize`)
/// - `style` and `color` were present in the catalog when they were set
///
/// # Example
///
/// ```
/// use trove_domain::aggregates::GearCatalog;
/// use trove_domain::entities::Boot;
/// use trove_domain::value_objects::{BootSize, ColorName, StyleName};
///
/// let catalog = GearCatalog::default();
/// let boot = Boot::new(
///     &catalog,
///     StyleName::new("sneakers").unwrap(),
///     BootSize::new(36.0).unwrap(),
///     ColorName::new("purple").unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(boot.to_string(), "purple sneakers, size 36");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boot {
    id: BootId,
    style: StyleName,
    size: BootSize,
    color: ColorName,
}

impl Boot {
    /// Create a new boot, checking style and color against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the style or the color is not
    /// in the catalog's allowed-sets.
    pub fn new(
        catalog: &GearCatalog,
        style: StyleName,
        size: BootSize,
        color: ColorName,
    ) -> Result<Self, DomainError> {
        if !catalog.allows_style(&style) {
            return Err(DomainError::validation(format!(
                "Boot style '{}' is not in the gear catalog",
                style
            )));
        }
        if !catalog.allows_color(&color) {
            return Err(DomainError::validation(format!(
                "Boot color '{}' is not in the gear catalog",
                color
            )));
        }
        Ok(Self {
            id: BootId::new(),
            style,
            size,
            color,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the boot's unique identifier.
    #[inline]
    pub fn id(&self) -> BootId {
        self.id
    }

    /// Returns the boot's style.
    #[inline]
    pub fn style(&self) -> &StyleName {
        &self.style
    }

    /// Returns the boot's size.
    #[inline]
    pub fn size(&self) -> BootSize {
        self.size
    }

    /// Returns the boot's color.
    #[inline]
    pub fn color(&self) -> &ColorName {
        &self.color
    }

    // =========================================================================
    // Mutation Methods
    // =========================================================================

    /// Stretch or shrink the boot by `delta` sizes.
    ///
    /// The result is clamped to the sellable range `[16, 60]`; the returned
    /// [`SizeAdjustment`] records both endpoints.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `delta` is non-finite.
    pub fn adjust_size(&mut self, delta: f64) -> Result<SizeAdjustment, DomainError> {
        if !delta.is_finite() {
            return Err(DomainError::validation("Size delta must be finite"));
        }
        let from = self.size;
        self.size = self.size.adjusted_by(delta);
        Ok(SizeAdjustment {
            from,
            to: self.size,
        })
    }

    /// Change the boot's style, re-checking the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the style is not in the
    /// catalog's allowed-set.
    pub fn restyle(&mut self, catalog: &GearCatalog, style: StyleName) -> Result<(), DomainError> {
        if !catalog.allows_style(&style) {
            return Err(DomainError::validation(format!(
                "Boot style '{}' is not in the gear catalog",
                style
            )));
        }
        self.style = style;
        Ok(())
    }

    /// Change the boot's color, re-checking the catalog.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the color is not in the
    /// catalog's allowed-set.
    pub fn recolor(&mut self, catalog: &GearCatalog, color: ColorName) -> Result<(), DomainError> {
        if !catalog.allows_color(&color) {
            return Err(DomainError::validation(format!(
                "Boot color '{}' is not in the gear catalog",
                color
            )));
        }
        self.color = color;
        Ok(())
    }
}

impl fmt::Display for Boot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}, size {}", self.color, self.style, self.size)
    }
}
