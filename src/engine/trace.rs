use super::elimination::Elimination;
use super::iteration::Iteration;

/// The sweeps of one run, in order. The last one eliminated nothing.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Trace(Vec<Iteration>);

impl Trace {
    pub fn iterations(&self) -> &[Iteration] {
        &self.0
    }
    pub fn eliminations(&self) -> impl Iterator<Item = &Elimination> {
        self.0.iter().flat_map(Iteration::eliminations)
    }
    pub fn push(&mut self, iteration: Iteration) {
        self.0.push(iteration);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for iteration in &self.0 {
            writeln!(f, "{}", iteration)?;
        }
        Ok(())
    }
}
