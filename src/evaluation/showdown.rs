use super::classifier::Classifier;
use super::classifier::HighCard;
use super::evaluator::classify;
use super::ranked::RankedHand;
use crate::cards::Card;
use crate::cards::Hand;
use std::cmp::Ordering;

/// Two ranked hands, ordered from the first hand's point of view.
///
/// Priority is category, then defining values pairwise, then kickers one
/// card at a time from the highest down.
pub struct Showdown {
    hero: RankedHand,
    villain: RankedHand,
}

impl From<(RankedHand, RankedHand)> for Showdown {
    fn from((hero, villain): (RankedHand, RankedHand)) -> Self {
        Self { hero, villain }
    }
}

impl From<(&Hand, &Hand)> for Showdown {
    fn from((hero, villain): (&Hand, &Hand)) -> Self {
        Self::from((classify(hero), classify(villain)))
    }
}

impl Showdown {
    pub fn hero(&self) -> &RankedHand {
        &self.hero
    }
    pub fn villain(&self) -> &RankedHand {
        &self.villain
    }

    pub fn settle(&self) -> Ordering {
        self.by_category()
            .then_with(|| self.by_values())
            .then_with(|| self.by_kickers())
    }

    fn by_category(&self) -> Ordering {
        self.hero.category().cmp(&self.villain.category())
    }

    fn by_values(&self) -> Ordering {
        self.hero.values().ranks().cmp(self.villain.values().ranks())
    }

    fn by_kickers(&self) -> Ordering {
        compare_kickers(self.hero.remaining(), self.villain.remaining())
    }
}

/// Order `hero` relative to `villain`: Greater means `hero` wins.
pub fn compare(hero: &Hand, villain: &Hand) -> Ordering {
    Showdown::from((hero, villain)).settle()
}

/// Peel the single highest card off both sides until one differs.
///
/// Both residuals shrink by one card per step, so the loop ends once
/// either side runs dry. A side with cards left over beats an empty one.
pub fn compare_kickers(hero: &[Card], villain: &[Card]) -> Ordering {
    let mut hero = hero.to_vec();
    let mut villain = villain.to_vec();
    loop {
        match (HighCard.classify(&hero), HighCard.classify(&villain)) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (Some(h), Some(v)) => match h.values().ranks().cmp(v.values().ranks()) {
                Ordering::Equal => {
                    hero = h.into_remaining();
                    villain = v.into_remaining();
                }
                decided => return decided,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn versus(hero: &str, villain: &str) -> Ordering {
        let hero = Hand::try_from(hero).unwrap();
        let villain = Hand::try_from(villain).unwrap();
        compare(&hero, &villain)
    }

    #[test]
    fn royal_flush_beats_pair() {
        assert_eq!(versus("AH TH KH JH QH", "2C 2S 2S 2D 4D"), Ordering::Greater);
    }

    #[test]
    fn higher_card_wins() {
        assert_eq!(versus("2H 3C 4S 5S 8D", "2C 3S 4S 5D 9D"), Ordering::Less);
    }

    #[test]
    fn identical_straights_tie() {
        assert_eq!(versus("2S 3H 4H 5S 6C", "3D 4C 5H 6H 2S"), Ordering::Equal);
    }

    #[test]
    fn second_value_decides_full_house() {
        assert_eq!(versus("2H 2D 4C 4D 4S", "4C 4D 4S 9S 9D"), Ordering::Less);
    }

    #[test]
    fn kickers_decide_pairs() {
        assert_eq!(versus("4D 6S 9H QH QC", "3D 6D 7H QD QS"), Ordering::Greater);
        assert_eq!(versus("6S AD 7H 4S AS", "AH AC 5H 6H 7S"), Ordering::Less);
    }

    #[test]
    fn last_kicker_decides_high_card() {
        assert_eq!(versus("4S 5H 6H TS AC", "3S 5H 6H TS AC"), Ordering::Greater);
    }

    #[test]
    fn flushes_compare_by_top_card_only() {
        assert_eq!(versus("AS 3S 4S 8S 2S", "AH 3H 4H 9H 2H"), Ordering::Equal);
    }

    #[test]
    fn kicker_residuals() {
        let cards = |s: &str| Hand::try_from(s).unwrap().cards().to_vec();
        let a = cards("KH 9C 4S 3D 2D");
        let b = cards("KS 9D 4C 3H 2C");
        let c = cards("KS 9D 5C 3H 2C");
        assert_eq!(compare_kickers(&a, &b), Ordering::Equal);
        assert_eq!(compare_kickers(&a, &c), Ordering::Less);
        assert_eq!(compare_kickers(&a[..4], &b), Ordering::Less);
        assert_eq!(compare_kickers(&b, &a[..4]), Ordering::Greater);
        assert_eq!(compare_kickers(&a[..1], &a[..3]), Ordering::Less);
        assert_eq!(compare_kickers(&[], &[]), Ordering::Equal);
    }
}
