use crate::game::Game;
use crate::game::Matrix;
use crate::game::Strictness;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "ieds",
    version,
    about = "Performs IEDS on a two-player game in normal form",
    long_about = "Performs iterated elimination of dominated strategies on a two-player game in normal form.\n\
                  Each MATRIX is a CSV file with one player's payoffs.\n\
                  If only one is given the game is assumed symmetric,\n\
                  and player 2's matrix is the transpose of player 1's.\n\
                  By default only strictly dominated strategies are eliminated."
)]
pub struct Args {
    #[arg(
        required = true,
        num_args = 1..=2,
        value_name = "MATRIX",
        help = "CSV payoff matrix for player 1, then optionally player 2"
    )]
    pub matrices: Vec<PathBuf>,
    #[arg(
        short = 'w',
        long = "weak",
        overrides_with = "very_weak",
        help = "eliminate weakly dominated strategies"
    )]
    pub weak: bool,
    #[arg(
        short = 'v',
        long = "very-weak",
        overrides_with = "weak",
        help = "eliminate very weakly dominated strategies"
    )]
    pub very_weak: bool,
    #[arg(long, help = "print a JSON summary instead of the trace")]
    pub json: bool,
    #[arg(short = 'q', long, conflicts_with = "verbose", help = "only log warnings")]
    pub quiet: bool,
    #[arg(long, help = "log every elimination as it happens")]
    pub verbose: bool,
}

impl Args {
    pub fn strictness(&self) -> Strictness {
        match (self.weak, self.very_weak) {
            (_, true) => Strictness::VeryWeak,
            (true, _) => Strictness::Weak,
            _ => Strictness::Strict,
        }
    }
    pub fn level(&self) -> log::LevelFilter {
        match (self.quiet, self.verbose) {
            (true, _) => log::LevelFilter::Warn,
            (_, true) => log::LevelFilter::Debug,
            _ => log::LevelFilter::Info,
        }
    }
    /// Load the payoff matrices and pair them into a game.
    pub fn game(&self) -> anyhow::Result<Game> {
        match self.matrices.as_slice() {
            [p1] => Game::symmetric(Matrix::load(p1)?),
            [p1, p2] => Game::new(Matrix::load(p1)?, Matrix::load(p2)?),
            [] => anyhow::bail!("no game matrix found"),
            _ => anyhow::bail!("at most two game matrices may be given"),
        }
    }
}
