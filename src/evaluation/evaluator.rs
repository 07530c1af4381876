use super::classifier::CLASSIFIERS;
use super::ranked::RankedHand;
use crate::cards::Hand;

/// Resolves a hand to its strongest matching category.
///
/// Walks the fixed classifier sequence from RoyalFlush down to HighCard
/// and stops at the first match. HighCard matches any non-empty hand,
/// so resolution always succeeds after at most ten attempts.
pub struct Evaluator(Hand);

impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> RankedHand {
        CLASSIFIERS
            .iter()
            .rev()
            .find_map(|classifier| {
                classifier
                    .classify(self.0.cards())
                    .map(|found| RankedHand::from((classifier.category(), found)))
            })
            .expect("high card matches any non-empty hand")
    }
}

/// Strongest category of `hand` and its classification.
pub fn classify(hand: &Hand) -> RankedHand {
    Evaluator::from(*hand).find_ranking()
}
