use super::category::Category;
use super::classification::Classification;
use super::values::Values;
use crate::cards::Card;

/// A hand's strongest category together with what its classifier found.
///
/// Computed fresh for every comparison and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedHand {
    category: Category,
    classification: Classification,
}

impl RankedHand {
    pub fn category(&self) -> Category {
        self.category
    }
    pub fn values(&self) -> Values {
        self.classification.values()
    }
    pub fn remaining(&self) -> &[Card] {
        self.classification.remaining()
    }
}

impl From<(Category, Classification)> for RankedHand {
    fn from((category, classification): (Category, Classification)) -> Self {
        Self {
            category,
            classification,
        }
    }
}

/// "FullHouse 36", "RoyalFlush"
impl std::fmt::Display for RankedHand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.values() {
            Values::Royal => write!(f, "{}", self.category),
            values => write!(f, "{} {}", self.category, values),
        }
    }
}
