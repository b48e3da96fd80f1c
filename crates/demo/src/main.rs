//! Trove Demo - walkthrough of the trove domain
//!
//! This crate is the *composition root* for the demo. It loads
//! configuration from the environment, sets up logging, and walks every
//! entity through its lifecycle.

mod config;
mod run;

fn main() -> anyhow::Result<()> {
    run::run()
}
