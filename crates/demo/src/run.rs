//! Demo walkthrough
//!
//! One section per entity kind. Expected rejections are part of the show:
//! they are logged at warn level instead of aborting the run.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trove_domain::{
    Armor, AuthorName, BookTitle, Boot, BootSize, Character, CharacterName, ColorName,
    DamageOutcome, Edition, GearCatalog, Guitar, GuitarKind, HealOutcome, HealthPool, Library,
    StyleName,
};

use crate::config::DemoConfig;

pub fn run() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trove_demo=info,trove_domain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Trove demo");

    let config = DemoConfig::from_env()?;
    tracing::info!("Configuration loaded");
    tracing::info!("  Hero: {}", config.hero_name);
    tracing::info!("  Combat rounds: {}", config.combat_rounds);

    shelve_books()?;
    outfit_boots()?;
    restring_guitar()?;
    run_combat(&config)?;

    tracing::info!("Demo complete");
    Ok(())
}

/// Build a library and exercise catalog numbering and lookup.
fn shelve_books() -> Result<()> {
    let mut library = Library::new();
    tracing::info!(
        "Empty library hands out catalog number {}",
        library.next_book_id()
    );

    let first = library.accession(
        BookTitle::new("Alphabet")?,
        AuthorName::new("Krusenstern")?,
        Edition::paper(120)?,
    );
    let second = library.accession(
        BookTitle::new("A Hero of Our Time")?,
        AuthorName::new("Lermontov")?,
        Edition::audio(54.97)?,
    );

    for book in library.books() {
        tracing::info!("Shelved: {}", book);
    }
    tracing::info!(
        "Book {} sits at position {}",
        second,
        library.position_of(second)?
    );

    let removed = library.remove(first)?;
    tracing::info!("Withdrawn: {}", removed);
    match library.position_of(first) {
        Ok(_) => tracing::error!("Withdrawn book is still on the shelf"),
        Err(err) => tracing::warn!(%err, "Lookup after withdrawal fails as it should"),
    }

    Ok(())
}

/// Build boots against the gear catalog, then shrink the catalog.
fn outfit_boots() -> Result<()> {
    let mut catalog = GearCatalog::default();

    let mut boot = Boot::new(
        &catalog,
        StyleName::new("sneakers")?,
        BootSize::new(36.0)?,
        ColorName::new("purple")?,
    )?;
    tracing::info!("Made {}", boot);

    let adjustment = boot.adjust_size(-100.0)?;
    tracing::info!(
        "Shrinking by 100 sizes stops at the range: {} -> {}",
        adjustment.from,
        adjustment.to
    );

    catalog.remove_style(&StyleName::new("dress shoes")?)?;
    match Boot::new(
        &catalog,
        StyleName::new("dress shoes")?,
        BootSize::new(44.0)?,
        ColorName::new("black")?,
    ) {
        Ok(_) => tracing::error!("Removed style should not be constructible"),
        Err(err) => tracing::warn!(%err, "Construction after removal fails as it should"),
    }

    Ok(())
}

/// Restring a guitar and flip its pickup.
fn restring_guitar() -> Result<()> {
    let mut guitar = Guitar::new(GuitarKind::new("balalaika")?, 3, true);
    tracing::info!("Tuning {}", guitar);

    let strings = guitar.add_strings(4)?;
    tracing::info!("Added four strings, now {}", strings);
    guitar.toggle_electric();
    tracing::info!("Unplugged: {}", guitar);

    Ok(())
}

/// Run the configured number of combat rounds against the hero.
fn run_combat(config: &DemoConfig) -> Result<()> {
    let mut hero = Character::new(
        CharacterName::new(config.hero_name.as_str())?,
        HealthPool::new(100.0, 80.0)?,
        Armor::new(10.0)?,
    );
    tracing::info!("Entering combat: {}", hero);

    for round in 1..=config.combat_rounds {
        let hit = 10.0 + f64::from(round) * 5.0;
        match hero.take_damage(hit)? {
            DamageOutcome::Wounded {
                damage_dealt,
                remaining_health,
            } => tracing::info!(
                "Round {}: hit for {:.2} after armor, {:.2} health left",
                round,
                damage_dealt,
                remaining_health
            ),
            DamageOutcome::Downed { damage_dealt } => {
                tracing::warn!("Round {}: hit for {:.2} and downed", round, damage_dealt);
                break;
            }
        }
    }

    match hero.heal(1000.0)? {
        HealOutcome::Healed {
            amount_healed,
            new_health,
        } => tracing::info!(
            "Patched up for {:.2}, back to {:.2} health",
            amount_healed,
            new_health
        ),
        HealOutcome::AlreadyFull => tracing::info!("Hero never took a scratch"),
    }
    tracing::info!("Leaving combat: {}", hero);

    Ok(())
}
