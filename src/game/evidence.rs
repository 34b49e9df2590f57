use std::cmp::Ordering;

/// What a challenger strategy showed against an incumbent,
/// one opponent response at a time.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Evidence {
    lesser: bool,
    equal: bool,
    greater: bool,
}

impl Evidence {
    /// challenger paid less somewhere
    pub fn lesser(&self) -> bool {
        self.lesser
    }
    /// challenger tied somewhere
    pub fn equal(&self) -> bool {
        self.equal
    }
    /// challenger paid more somewhere
    pub fn greater(&self) -> bool {
        self.greater
    }
    /// record one comparison of challenger payoff against incumbent payoff
    pub fn witness(self, ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self { lesser: true, ..self },
            Ordering::Equal => Self { equal: true, ..self },
            Ordering::Greater => Self { greater: true, ..self },
        }
    }
}

impl FromIterator<Ordering> for Evidence {
    fn from_iter<I: IntoIterator<Item = Ordering>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), Self::witness)
    }
}
