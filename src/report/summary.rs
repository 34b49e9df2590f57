use crate::engine::Elimination;
use crate::engine::Trace;
use crate::game::Game;
use crate::game::Player;
use crate::game::Strictness;
use crate::*;

/// Machine-readable outcome of one run. Strategy indices are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub strictness: Strictness,
    pub dims: (usize, usize),
    pub size: (usize, usize),
    pub iterations: usize,
    pub rows: Vec<Strategy>,
    pub cols: Vec<Strategy>,
    pub eliminations: Vec<Elimination>,
    pub p1: Vec<Vec<Payoff>>,
    pub p2: Vec<Vec<Payoff>>,
}

impl Summary {
    pub fn json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl From<(&Game, &Trace, Strictness)> for Summary {
    fn from((game, trace, strictness): (&Game, &Trace, Strictness)) -> Self {
        Self {
            strictness,
            dims: game.dims(),
            size: game.size(),
            iterations: trace.len(),
            rows: game.live_rows().collect(),
            cols: game.live_cols().collect(),
            eliminations: trace.eliminations().copied().collect(),
            p1: game.reduced(Player::P1),
            p2: game.reduced(Player::P2),
        }
    }
}
