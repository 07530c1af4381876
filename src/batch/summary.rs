use std::cmp::Ordering;

/// Outcome counts for a batch of matchups.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Summary {
    wins: usize,
    total: usize,
    skipped: usize,
}

impl Summary {
    /// Matchups the first hand won outright.
    pub fn wins(&self) -> usize {
        self.wins
    }
    /// Matchups settled, ties and losses included.
    pub fn total(&self) -> usize {
        self.total
    }
    /// Lines dropped because they did not parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn record(self, outcome: Ordering) -> Self {
        Self {
            wins: self.wins + usize::from(outcome == Ordering::Greater),
            total: self.total + 1,
            ..self
        }
    }
    pub fn skip(self) -> Self {
        Self {
            skipped: self.skipped + 1,
            ..self
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Player 1 wins {} times of {}", self.wins, self.total)
    }
}
