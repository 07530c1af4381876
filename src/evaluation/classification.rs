use super::values::Values;
use crate::cards::Card;
use crate::cards::Rank;

/// What a matching classifier found: the defining values plus the cards
/// left over for tie-breaking, in the order they appeared in the hand.
///
/// Cards consumed by the defining pattern together with `remaining`
/// always reconstruct the classified cards exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    values: Values,
    remaining: Vec<Card>,
}

impl Classification {
    pub fn new(values: Values, remaining: Vec<Card>) -> Self {
        Self { values, remaining }
    }
    /// A pattern that consumes every card.
    pub fn whole(values: Values) -> Self {
        Self::new(values, Vec::new())
    }
    pub fn values(&self) -> Values {
        self.values
    }
    pub fn remaining(&self) -> &[Card] {
        &self.remaining
    }
    pub fn into_remaining(self) -> Vec<Card> {
        self.remaining
    }
}

/// Occurrences of each Rank among some cards.
pub struct Counts([u8; 13]);

impl From<&[Card]> for Counts {
    fn from(cards: &[Card]) -> Self {
        let mut counts = [0u8; 13];
        for card in cards {
            counts[u8::from(card.rank()) as usize] += 1;
        }
        Self(counts)
    }
}

impl Counts {
    /// Ranks occurring exactly `n` times, highest first.
    pub fn exactly(&self, n: u8) -> Vec<Rank> {
        Rank::all()
            .into_iter()
            .rev()
            .filter(|r| self.0[u8::from(*r) as usize] == n)
            .collect()
    }
    /// Largest multiplicity of any single rank.
    pub fn most(&self) -> u8 {
        self.0.iter().copied().max().unwrap_or(0)
    }
    /// Number of distinct ranks present.
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&n| n > 0).count()
    }
}

/// The cards whose rank is not among `ranks`, order preserved.
pub fn without(cards: &[Card], ranks: &[Rank]) -> Vec<Card> {
    cards
        .iter()
        .filter(|c| !ranks.contains(&c.rank()))
        .copied()
        .collect()
}
