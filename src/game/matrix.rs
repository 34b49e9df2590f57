use crate::*;
use anyhow::Context;
use std::path::Path;

/// Cell separators accepted when parsing a payoff table.
const DELIMITERS: [char; 3] = [',', ';', '\t'];

/// Rectangular payoff table for one player, stored row-major.
///
/// Construction guarantees at least one row, at least one column,
/// and that every row has the same length.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Payoff>,
}

impl Matrix {
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
    pub fn row(&self, row: Strategy) -> &[Payoff] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }
    pub fn transpose(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|j| (0..self.rows).map(move |i| (i, j)))
                .map(|ij| self[ij])
                .collect(),
        }
    }
    /// Uniformly random payoffs of the given shape.
    pub fn sample(rows: usize, cols: usize) -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        Self {
            rows,
            cols,
            cells: (0..rows * cols)
                .map(|_| rng.random_range(ARBITRARY_PAYOFF))
                .collect(),
        }
    }
    /// Read a delimited table of integers from disk.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not load file: {}", path.display()))?;
        let matrix = Self::try_from(text.as_str())
            .with_context(|| format!("could not parse file: {}", path.display()))?;
        log::debug!(
            "loaded {}x{} matrix from {}",
            matrix.rows,
            matrix.cols,
            path.display()
        );
        Ok(matrix)
    }
}

impl std::ops::Index<(Strategy, Strategy)> for Matrix {
    type Output = Payoff;
    fn index(&self, (row, col): (Strategy, Strategy)) -> &Self::Output {
        &self.cells[row * self.cols + col]
    }
}

impl TryFrom<Vec<Vec<Payoff>>> for Matrix {
    type Error = anyhow::Error;
    fn try_from(table: Vec<Vec<Payoff>>) -> Result<Self, Self::Error> {
        let rows = table.len();
        let cols = table.first().map(Vec::len).unwrap_or_default();
        if rows == 0 || cols == 0 {
            anyhow::bail!("empty payoff matrix");
        }
        if let Some((i, row)) = table.iter().enumerate().find(|(_, r)| r.len() != cols) {
            anyhow::bail!(
                "row {} has {} entries, expected {}",
                i + 1,
                row.len(),
                cols
            );
        }
        Ok(Self {
            rows,
            cols,
            cells: table.into_iter().flatten().collect(),
        })
    }
}

impl TryFrom<&str> for Matrix {
    type Error = anyhow::Error;
    fn try_from(text: &str) -> Result<Self, Self::Error> {
        text.lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                line.split(DELIMITERS)
                    .enumerate()
                    .map(|(j, cell)| {
                        cell.trim().parse::<Payoff>().map_err(|_| {
                            anyhow::anyhow!(
                                "row {}, col {}: not an integer: '{}'",
                                i + 1,
                                j + 1,
                                cell.trim()
                            )
                        })
                    })
                    .collect::<anyhow::Result<Vec<Payoff>>>()
            })
            .collect::<anyhow::Result<Vec<Vec<Payoff>>>>()
            .and_then(|table| Self::try_from(table))
    }
}

/// every payoff, tab separated, one row per line
impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            let line = self
                .row(row)
                .iter()
                .map(|payoff| payoff.to_string())
                .collect::<Vec<_>>()
                .join("\t");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_csv() {
        let matrix = Matrix::try_from("3, 3\n5, 0\n").unwrap();
        assert_eq!(matrix.dims(), (2, 2));
        assert_eq!(matrix.row(0), &[3, 3]);
        assert_eq!(matrix.row(1), &[5, 0]);
    }

    #[test]
    fn parse_mixed_delimiters_and_blank_lines() {
        let matrix = Matrix::try_from("\n1;-2\t3\n\n  4 ,5,-6  \n").unwrap();
        assert_eq!(matrix.dims(), (2, 3));
        assert_eq!(matrix[(0, 1)], -2);
        assert_eq!(matrix[(1, 2)], -6);
    }

    #[test]
    fn reject_non_integer() {
        let error = Matrix::try_from("1,2\n3,x\n").unwrap_err();
        assert!(error.to_string().contains("row 2, col 2"), "{}", error);
    }

    #[test]
    fn reject_ragged() {
        let error = Matrix::try_from("1,2,3\n4,5\n").unwrap_err();
        assert!(error.to_string().contains("row 2"), "{}", error);
    }

    #[test]
    fn reject_empty() {
        assert!(Matrix::try_from("").is_err());
        assert!(Matrix::try_from("\n  \n").is_err());
        assert!(Matrix::try_from(Vec::<Vec<Payoff>>::new()).is_err());
    }

    #[test]
    fn extreme_payoffs_are_legal() {
        let matrix = Matrix::try_from(vec![vec![Payoff::MIN, Payoff::MAX]]).unwrap();
        assert_eq!(matrix[(0, 0)], Payoff::MIN);
        assert_eq!(matrix[(0, 1)], Payoff::MAX);
    }

    #[test]
    fn transpose_swaps_indices() {
        let matrix = Matrix::try_from("1,2,3\n4,5,6").unwrap();
        let transpose = matrix.transpose();
        assert_eq!(transpose.dims(), (3, 2));
        for i in 0..matrix.rows() {
            for j in 0..matrix.cols() {
                assert_eq!(matrix[(i, j)], transpose[(j, i)]);
            }
        }
        assert_eq!(transpose.transpose(), matrix);
    }

    #[test]
    fn sample_within_bounds() {
        let matrix = Matrix::sample(3, 5);
        assert_eq!(matrix.dims(), (3, 5));
        assert!(matrix.cells.iter().all(|p| ARBITRARY_PAYOFF.contains(p)));
    }

    #[test]
    fn display_tab_separated() {
        let matrix = Matrix::try_from("1,2\n3,4").unwrap();
        assert_eq!(matrix.to_string(), "1\t2\n3\t4\n");
    }

    #[test]
    fn load_missing_file() {
        let error = Matrix::load("does/not/exist.csv").unwrap_err();
        assert!(error.to_string().contains("could not load file"), "{}", error);
    }

    #[test]
    fn load_from_disk() {
        let path = std::env::temp_dir().join(format!("ieds-load-{}.csv", std::process::id()));
        std::fs::write(&path, "4,4\n2,2\n").unwrap();
        let matrix = Matrix::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(matrix, Matrix::try_from(vec![vec![4, 4], vec![2, 2]]).unwrap());
    }
}
