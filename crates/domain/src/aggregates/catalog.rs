//! Gear catalog aggregate - the owning registry of boot vocabulary
//!
//! The catalog holds the allowed-sets of boot styles and colors. Boots are
//! validated against a catalog reference at construction, so the catalog is
//! explicit shared state with a single owner rather than a process-wide
//! global.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{ColorName, StyleName};

/// The registry of permitted boot styles and colors.
///
/// `Default` seeds the stock vocabulary; an empty catalog (no valid boots
/// at all) is available through [`GearCatalog::empty`].
///
/// # Examples
///
/// ```
/// use trove_domain::aggregates::GearCatalog;
/// use trove_domain::value_objects::StyleName;
///
/// let mut catalog = GearCatalog::default();
/// let moccasins = StyleName::new("moccasins").unwrap();
/// assert!(!catalog.allows_style(&moccasins));
/// catalog.add_style(moccasins.clone());
/// assert!(catalog.allows_style(&moccasins));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GearCatalog {
    styles: BTreeSet<StyleName>,
    colors: BTreeSet<ColorName>,
}

impl GearCatalog {
    /// Create a catalog with no permitted styles or colors.
    pub fn empty() -> Self {
        Self {
            styles: BTreeSet::new(),
            colors: BTreeSet::new(),
        }
    }

    // =========================================================================
    // Styles
    // =========================================================================

    /// Returns the permitted styles in sorted order.
    pub fn styles(&self) -> impl Iterator<Item = &StyleName> {
        self.styles.iter()
    }

    /// Returns true if `style` is currently permitted.
    pub fn allows_style(&self, style: &StyleName) -> bool {
        self.styles.contains(style)
    }

    /// Add a style to the allowed-set.
    ///
    /// Returns true if the style was not already present.
    pub fn add_style(&mut self, style: StyleName) -> bool {
        self.styles.insert(style)
    }

    /// Remove a style from the allowed-set.
    ///
    /// Boots already constructed with the style are unaffected; only new
    /// constructions are.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the style is not in the set.
    pub fn remove_style(&mut self, style: &StyleName) -> Result<(), DomainError> {
        if !self.styles.remove(style) {
            return Err(DomainError::not_found("BootStyle", style.as_str()));
        }
        Ok(())
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// Returns the permitted colors in sorted order.
    pub fn colors(&self) -> impl Iterator<Item = &ColorName> {
        self.colors.iter()
    }

    /// Returns true if `color` is currently permitted.
    pub fn allows_color(&self, color: &ColorName) -> bool {
        self.colors.contains(color)
    }

    /// Add a color to the allowed-set.
    ///
    /// Returns true if the color was not already present.
    pub fn add_color(&mut self, color: ColorName) -> bool {
        self.colors.insert(color)
    }

    /// Remove a color from the allowed-set.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the color is not in the set.
    pub fn remove_color(&mut self, color: &ColorName) -> Result<(), DomainError> {
        if !self.colors.remove(color) {
            return Err(DomainError::not_found("BootColor", color.as_str()));
        }
        Ok(())
    }
}

impl Default for GearCatalog {
    /// The stock vocabulary boots ship with.
    fn default() -> Self {
        let styles = ["sneakers", "loafers", "dress shoes"]
            .into_iter()
            .map(|s| StyleName::new(s).expect("stock style is valid"))
            .collect();
        let colors = ["black", "blue", "red", "purple"]
            .into_iter()
            .map(|c| ColorName::new(c).expect("stock color is valid"))
            .collect();
        Self { styles, colors }
    }
}
