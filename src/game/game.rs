use super::matrix::Matrix;
use super::player::Player;
use crate::*;

/// Both players' payoffs over a shared strategy space,
/// plus which rows and columns are still in play.
///
/// Payoff cells are never overwritten. Elimination only flips liveness,
/// so indices stay stable and every integer is a legal payoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    p1: Matrix,
    p2: Matrix,
    rows: Vec<bool>,
    cols: Vec<bool>,
}

impl Game {
    pub fn new(p1: Matrix, p2: Matrix) -> anyhow::Result<Self> {
        if p1.dims() != p2.dims() {
            anyhow::bail!(
                "incompatible matrix sizes: {}x{} and {}x{}",
                p1.rows(),
                p1.cols(),
                p2.rows(),
                p2.cols()
            );
        }
        Ok(Self {
            rows: vec![true; p1.rows()],
            cols: vec![true; p1.cols()],
            p1,
            p2,
        })
    }
    /// Player 2 sees the transpose of player 1's payoffs,
    /// so only square matrices make a symmetric game.
    pub fn symmetric(p1: Matrix) -> anyhow::Result<Self> {
        let p2 = p1.transpose();
        Self::new(p1, p2)
    }

    pub fn p1(&self) -> &Matrix {
        &self.p1
    }
    pub fn p2(&self) -> &Matrix {
        &self.p2
    }
    pub fn matrix(&self, player: Player) -> &Matrix {
        match player {
            Player::P1 => &self.p1,
            Player::P2 => &self.p2,
        }
    }
    /// rows x cols as constructed
    pub fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }
    /// live rows x live cols
    pub fn size(&self) -> (usize, usize) {
        (self.live_rows().count(), self.live_cols().count())
    }
    /// how many strategies this player started with
    pub fn strategies(&self, player: Player) -> usize {
        self.liveness(player).len()
    }

    pub fn is_row_live(&self, row: Strategy) -> bool {
        self.rows[row]
    }
    pub fn is_col_live(&self, col: Strategy) -> bool {
        self.cols[col]
    }
    pub fn is_live(&self, player: Player, strategy: Strategy) -> bool {
        self.liveness(player)[strategy]
    }

    pub fn live_rows(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.live(Player::P1)
    }
    pub fn live_cols(&self) -> impl Iterator<Item = Strategy> + '_ {
        self.live(Player::P2)
    }
    pub fn live(&self, player: Player) -> impl Iterator<Item = Strategy> + '_ {
        self.liveness(player)
            .iter()
            .enumerate()
            .filter(|(_, live)| **live)
            .map(|(strategy, _)| strategy)
    }

    pub fn eliminate_row(&mut self, row: Strategy) {
        self.rows[row] = false;
    }
    pub fn eliminate_col(&mut self, col: Strategy) {
        self.cols[col] = false;
    }
    pub fn eliminate(&mut self, player: Player, strategy: Strategy) {
        match player {
            Player::P1 => self.eliminate_row(strategy),
            Player::P2 => self.eliminate_col(strategy),
        }
    }

    /// A player's surviving payoffs, eliminated rows and columns left out.
    pub fn reduced(&self, player: Player) -> Vec<Vec<Payoff>> {
        let matrix = self.matrix(player);
        self.live_rows()
            .map(|i| self.live_cols().map(|j| matrix[(i, j)]).collect())
            .collect()
    }

    fn liveness(&self, player: Player) -> &[bool] {
        match player {
            Player::P1 => &self.rows,
            Player::P2 => &self.cols,
        }
    }
}

impl Arbitrary for Game {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let rows = rng.random_range(1..=ARBITRARY_SIDE);
        let cols = rng.random_range(1..=ARBITRARY_SIDE);
        Self {
            p1: Matrix::sample(rows, cols),
            p2: Matrix::sample(rows, cols),
            rows: vec![true; rows],
            cols: vec![true; cols],
        }
    }
}
