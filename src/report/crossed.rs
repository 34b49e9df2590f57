use crate::game::Game;
use crate::game::Player;
use crate::*;

/// A player's full matrix with every eliminated payoff crossed out.
pub struct Crossed<'a> {
    game: &'a Game,
    player: Player,
}

impl<'a> From<(&'a Game, Player)> for Crossed<'a> {
    fn from((game, player): (&'a Game, Player)) -> Self {
        Self { game, player }
    }
}

impl std::fmt::Display for Crossed<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let matrix = self.game.matrix(self.player);
        for i in 0..matrix.rows() {
            let line = (0..matrix.cols())
                .map(|j| match self.game.is_row_live(i) && self.game.is_col_live(j) {
                    true => matrix[(i, j)].to_string(),
                    false => CROSSOUT.to_string(),
                })
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
