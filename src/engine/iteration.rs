use super::elimination::Elimination;

/// Everything removed during one full sweep over rows then columns.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Iteration {
    ordinal: usize,
    eliminations: Vec<Elimination>,
}

impl Iteration {
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }
    pub fn eliminations(&self) -> &[Elimination] {
        &self.eliminations
    }
    /// nothing left to remove
    pub fn is_fixed(&self) -> bool {
        self.eliminations.is_empty()
    }
}

impl From<(usize, Vec<Elimination>)> for Iteration {
    fn from((ordinal, eliminations): (usize, Vec<Elimination>)) -> Self {
        Self {
            ordinal,
            eliminations,
        }
    }
}

impl std::fmt::Display for Iteration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Iteration #{}:", self.ordinal)?;
        if self.is_fixed() {
            writeln!(f, "No eliminations.")?;
        }
        for elimination in &self.eliminations {
            writeln!(f, "{}", elimination)?;
        }
        Ok(())
    }
}
