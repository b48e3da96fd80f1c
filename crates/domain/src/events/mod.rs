//! Domain Events
//!
//! The submodules contain return types from entity mutations,
//! communicating what happened when state was modified.

pub mod character_events;
pub mod gear_events;

pub use character_events::*;
pub use gear_events::*;
