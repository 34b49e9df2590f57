use crate::game::Player;
use crate::*;

/// One strategy removed in favor of another.
/// Indices are 0-based; the trace prints them 1-based.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
pub struct Elimination {
    pub player: Player,
    pub loser: Strategy,
    pub winner: Strategy,
}

impl std::fmt::Display for Elimination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.player {
            Player::P1 => write!(f, "Row {} dominated by row {}", self.loser + 1, self.winner + 1),
            Player::P2 => write!(f, "Col {} dominated by col {}", self.loser + 1, self.winner + 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_one_based() {
        let row = Elimination {
            player: Player::P1,
            loser: 1,
            winner: 0,
        };
        let col = Elimination {
            player: Player::P2,
            loser: 2,
            winner: 0,
        };
        assert_eq!(row.to_string(), "Row 2 dominated by row 1");
        assert_eq!(col.to_string(), "Col 3 dominated by col 1");
    }
}
