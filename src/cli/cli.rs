use super::args::Args;
use crate::engine::Eliminator;
use crate::engine::Iteration;
use crate::game::Game;
use crate::game::Player;
use crate::report::Crossed;
use crate::report::Reduced;
use crate::report::Size;
use crate::report::Summary;
use clap::CommandFactory;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

/// Command-line session: load, eliminate, report.
pub struct CLI(Args);

impl CLI {
    /// Parse the process arguments. Bad flags or a wrong number of
    /// matrices print usage and exit before anything is eliminated.
    pub fn new() -> Self {
        Self(Args::parse())
    }

    pub fn run() -> ExitCode {
        let cli = Self::new();
        crate::log(cli.0.level());
        cli.execute()
    }

    /// Load, eliminate and report. Unusable input prints usage and fails.
    fn execute(&self) -> ExitCode {
        match self.0.game() {
            Err(e) => {
                log::error!("{:#}", e);
                if let Err(e) = Args::command().print_help() {
                    log::error!("could not print usage: {}", e);
                }
                ExitCode::FAILURE
            }
            Ok(game) => match self.handle(game) {
                Err(e) => {
                    log::error!("{:#}", e);
                    ExitCode::FAILURE
                }
                Ok(()) => ExitCode::SUCCESS,
            },
        }
    }

    fn handle(&self, game: Game) -> anyhow::Result<()> {
        let strictness = self.0.strictness();
        let (rows, cols) = game.dims();
        log::info!(
            "eliminating {} dominated strategies from a {}x{} game",
            strictness,
            rows,
            cols
        );
        if !self.0.json {
            for player in Player::both() {
                println!("{}", format!("{} Matrix:", player).bold());
                println!("{}", game.matrix(player));
            }
        }
        let mut eliminator = Eliminator::new(game, strictness);
        let trace = eliminator.run();
        let game = eliminator.into_game();
        if self.0.json {
            println!("{}", Summary::from((&game, &trace, strictness)).json()?);
            return Ok(());
        }
        trace.iterations().iter().for_each(Self::iteration);
        println!("{}\n", Size::from(&game));
        for player in Player::both() {
            println!("{}", format!("{} Matrix With Crossouts:", player).bold());
            println!("{}", Crossed::from((&game, player)));
        }
        for player in Player::both() {
            println!("{}", format!("{} Matrix After Removals:", player).bold());
            println!("{}", Reduced::from((&game, player)));
        }
        Ok(())
    }

    fn iteration(iteration: &Iteration) {
        println!("{}", format!("Iteration #{}:", iteration.ordinal()).bold());
        if iteration.is_fixed() {
            println!("{}", "No eliminations.".dimmed());
        }
        for elimination in iteration.eliminations() {
            println!("{}", elimination.to_string().red());
        }
        println!();
    }
}
