use super::elimination::Elimination;
use super::iteration::Iteration;
use super::trace::Trace;
use crate::game::Game;
use crate::game::Player;
use crate::game::Strictness;

/// Drives a game to the fixed point of iterated elimination.
///
/// Each sweep walks player 1's rows and then player 2's columns in ascending
/// index order, checking every candidate against every opponent strategy in
/// ascending order. A dominated candidate is removed on the spot, so later
/// comparisons in the same sweep already see it gone. Which of several
/// equivalent strategies survives therefore depends on index order.
#[derive(Debug, Clone)]
pub struct Eliminator {
    game: Game,
    strictness: Strictness,
    ordinal: usize,
}

impl Eliminator {
    pub fn new(game: Game, strictness: Strictness) -> Self {
        Self {
            game,
            strictness,
            ordinal: 0,
        }
    }
    pub fn game(&self) -> &Game {
        &self.game
    }
    pub fn into_game(self) -> Game {
        self.game
    }
    pub fn strictness(&self) -> Strictness {
        self.strictness
    }

    /// Sweep until a full pass removes nothing.
    pub fn run(&mut self) -> Trace {
        let mut trace = Trace::default();
        loop {
            let iteration = self.sweep();
            let fixed = iteration.is_fixed();
            trace.push(iteration);
            if fixed {
                break;
            }
        }
        let (rows, cols) = self.game.size();
        log::info!(
            "fixed point after {} iterations, {} eliminations, {}x{} remaining",
            trace.len(),
            trace.eliminations().count(),
            rows,
            cols
        );
        trace
    }

    /// One pass over rows, then columns.
    pub fn sweep(&mut self) -> Iteration {
        self.ordinal += 1;
        let eliminations = Player::both()
            .into_iter()
            .flat_map(|player| self.eliminate(player))
            .collect::<Vec<Elimination>>();
        log::debug!(
            "iteration {} eliminated {} strategies",
            self.ordinal,
            eliminations.len()
        );
        Iteration::from((self.ordinal, eliminations))
    }

    fn eliminate(&mut self, player: Player) -> Vec<Elimination> {
        let n = self.game.strategies(player);
        let mut eliminations = Vec::new();
        for loser in 0..n {
            // once removed, the loser cannot be dominated again this sweep
            let winner = (0..n).find(|&w| self.game.is_dominated(player, loser, w, self.strictness));
            if let Some(winner) = winner {
                self.game.eliminate(player, loser);
                let elimination = Elimination {
                    player,
                    loser,
                    winner,
                };
                log::debug!("{}, {}", elimination, self.strictness);
                eliminations.push(elimination);
            }
        }
        eliminations
    }
}
