/// Player 1 picks rows, player 2 picks columns.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    pub const fn both() -> [Self; 2] {
        [Self::P1, Self::P2]
    }
    pub const fn opponent(&self) -> Self {
        match self {
            Self::P1 => Self::P2,
            Self::P2 => Self::P1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::P1 => write!(f, "Player 1"),
            Self::P2 => write!(f, "Player 2"),
        }
    }
}
