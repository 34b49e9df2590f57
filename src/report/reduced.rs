use crate::game::Game;
use crate::game::Player;

/// A player's matrix with eliminated rows and columns removed.
pub struct Reduced<'a> {
    game: &'a Game,
    player: Player,
}

impl<'a> From<(&'a Game, Player)> for Reduced<'a> {
    fn from((game, player): (&'a Game, Player)) -> Self {
        Self { game, player }
    }
}

impl std::fmt::Display for Reduced<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.game.reduced(self.player) {
            let line = row
                .iter()
                .map(|payoff| payoff.to_string())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
