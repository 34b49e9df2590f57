//! Iterated elimination of dominated strategies for two-player games in normal form.
//!
//! A [`game::Game`] holds both players' payoff matrices together with the
//! liveness of every row (player 1 strategy) and column (player 2 strategy).
//! An [`engine::Eliminator`] sweeps the game to a fixed point under a chosen
//! [`game::Strictness`], and the [`report`] module renders what is left.
pub mod engine;
pub mod game;
pub mod report;

#[cfg(feature = "cli")]
pub mod cli;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Integer payoff of a single strategy profile.
pub type Payoff = i32;
/// Row index for player 1, column index for player 2.
pub type Strategy = usize;

// ============================================================================
// CONSTANTS
// ============================================================================
/// Inclusive payoff bounds used when sampling random games.
pub const ARBITRARY_PAYOFF: std::ops::RangeInclusive<Payoff> = -9..=9;
/// Largest side length of a randomly sampled game.
pub const ARBITRARY_SIDE: usize = 6;
/// Glyph standing in for an eliminated payoff.
pub const CROSSOUT: &str = "-";

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so stdout stays reserved for results.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .set_time_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
