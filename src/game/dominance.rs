use super::evidence::Evidence;
use super::game::Game;
use super::player::Player;
use super::strictness::Strictness;
use crate::*;
use std::cmp::Ordering;

impl Game {
    /// Is player 1's row `a` dominated by row `b`?
    pub fn is_row_dominated(&self, a: Strategy, b: Strategy, strictness: Strictness) -> bool {
        self.is_dominated(Player::P1, a, b, strictness)
    }
    /// Is player 2's column `a` dominated by column `b`?
    pub fn is_col_dominated(&self, a: Strategy, b: Strategy, strictness: Strictness) -> bool {
        self.is_dominated(Player::P2, a, b, strictness)
    }
    /// Is `incumbent` dominated by `challenger`, from `player`'s point of view?
    /// Never true for a strategy against itself or when either one is already gone.
    pub fn is_dominated(
        &self,
        player: Player,
        incumbent: Strategy,
        challenger: Strategy,
        strictness: Strictness,
    ) -> bool {
        incumbent != challenger
            && self.is_live(player, incumbent)
            && self.is_live(player, challenger)
            && strictness.dominates(&self.evidence(player, incumbent, challenger))
    }
    /// Compare challenger against incumbent across the opponent's strategies.
    /// An eliminated opponent strategy counts as a tie.
    pub fn evidence(&self, player: Player, incumbent: Strategy, challenger: Strategy) -> Evidence {
        let matrix = self.matrix(player);
        let opponent = player.opponent();
        (0..self.strategies(opponent))
            .map(|response| match (self.is_live(opponent, response), player) {
                (false, _) => Ordering::Equal,
                (true, Player::P1) => matrix[(challenger, response)].cmp(&matrix[(incumbent, response)]),
                (true, Player::P2) => matrix[(response, challenger)].cmp(&matrix[(response, incumbent)]),
            })
            .collect()
    }
}
