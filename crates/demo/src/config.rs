//! Demo configuration

use std::env;

use anyhow::{Context, Result};

/// Demo configuration loaded from environment
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Name of the character taking hits in the combat walkthrough
    pub hero_name: String,
    /// Number of hits the hero takes
    pub combat_rounds: u32,
}

impl DemoConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            hero_name: env::var("TROVE_HERO_NAME").unwrap_or_else(|_| "Sharik".to_string()),
            combat_rounds: env::var("TROVE_COMBAT_ROUNDS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .context("TROVE_COMBAT_ROUNDS must be a whole number")?,
        })
    }
}
