use super::evidence::Evidence;

/// How much evidence a challenger needs before it dominates an incumbent.
///
/// Each level admits everything the previous one does:
/// a strictly dominated strategy is weakly dominated,
/// and a weakly dominated strategy is very weakly dominated.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strictness {
    /// better against every opponent strategy
    #[default]
    Strict,
    /// never worse, better at least once
    Weak,
    /// never worse; identical strategies dominate each other
    VeryWeak,
}

impl Strictness {
    pub const fn all() -> [Self; 3] {
        [Self::Strict, Self::Weak, Self::VeryWeak]
    }
    pub fn dominates(&self, evidence: &Evidence) -> bool {
        match self {
            Self::Strict => !evidence.equal() && !evidence.lesser(),
            Self::Weak => evidence.greater() && !evidence.lesser(),
            Self::VeryWeak => !evidence.lesser(),
        }
    }
}

impl std::fmt::Display for Strictness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strictly"),
            Self::Weak => write!(f, "weakly"),
            Self::VeryWeak => write!(f, "very weakly"),
        }
    }
}
