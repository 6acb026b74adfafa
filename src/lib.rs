//! Rock-paper-scissors against a uniformly random opponent.
//!
//! ## Modules
//!
//! - [`game`] — Choices, the beats-relation, and the [`game::Dealer`] that plays a round
//! - [`dto`] — JSON request/response bodies for the `/play` endpoint
//! - [`server`] — actix-web routes, handlers, and static pages
//! - [`config`] — Command line and environment configuration
pub mod dto;
pub mod game;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for sampling and testing.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of distinct choices in the game.
pub const N_CHOICES: usize = 3;
/// Body of every rejected `/play` request.
pub const INVALID_CHOICE: &str = "Invalid choice";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with a timestamped log file.
/// Creates `dir` and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log(dir: &std::path::Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(dir.join(format!("{}.log", time)))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}
