//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns a collection and the invariants over it
//! - Hands out derived data (catalog numbers, membership answers) itself

mod catalog;
mod library;

pub use catalog::GearCatalog;
pub use library::Library;
