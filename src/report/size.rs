use crate::game::Game;

/// Live rows by live columns.
pub struct Size<'a>(&'a Game);

impl<'a> From<&'a Game> for Size<'a> {
    fn from(game: &'a Game) -> Self {
        Self(game)
    }
}

impl std::fmt::Display for Size<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, cols) = self.0.size();
        write!(f, "Post-elimination matrix size: {}x{}", rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Matrix;

    #[test]
    fn count_live() {
        let mut game = Game::symmetric(Matrix::try_from("4,4\n2,2").unwrap()).unwrap();
        assert_eq!(Size::from(&game).to_string(), "Post-elimination matrix size: 2x2");
        game.eliminate_row(1);
        assert_eq!(Size::from(&game).to_string(), "Post-elimination matrix size: 1x2");
    }
}
