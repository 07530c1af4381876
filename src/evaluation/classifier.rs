use super::category::Category;
use super::classification::Classification;
use super::classification::Counts;
use super::classification::without;
use super::values::Values;
use crate::cards::Card;
use crate::cards::Rank;

/// Attempt to recognise one category in some cards.
///
/// Classifiers are pure and independent of one another. Each rejects
/// cards that only match because they also form a stronger rank-count
/// pattern, so results stay composable outside of the resolver.
pub trait Classifier {
    fn category(&self) -> Category;
    fn classify(&self, cards: &[Card]) -> Option<Classification>;
}

/// Every classifier, weakest first, one per `Category::all()` slot.
pub const CLASSIFIERS: [&dyn Classifier; 10] = [
    &HighCard,
    &OnePair,
    &TwoPair,
    &ThreeOfAKind,
    &Straight,
    &Flush,
    &FullHouse,
    &FourOfAKind,
    &StraightFlush,
    &RoyalFlush,
];

pub struct HighCard;
pub struct OnePair;
pub struct TwoPair;
pub struct ThreeOfAKind;
pub struct Straight;
pub struct Flush;
pub struct FullHouse;
pub struct FourOfAKind;
pub struct StraightFlush;
pub struct RoyalFlush;

/// Matches any non-empty cards. Consumes exactly one card: the first
/// occurrence of the highest rank. This doubles as the kicker extractor.
impl Classifier for HighCard {
    fn category(&self) -> Category {
        Category::HighCard
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        let high = cards.iter().map(Card::rank).max()?;
        let index = cards.iter().position(|c| c.rank() == high)?;
        let mut remaining = cards.to_vec();
        remaining.remove(index);
        Some(Classification::new(Values::One(high), remaining))
    }
}

impl Classifier for OnePair {
    fn category(&self) -> Category {
        Category::OnePair
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        let counts = Counts::from(cards);
        match counts.exactly(2).as_slice() {
            [pair] if counts.most() == 2 => Some(Classification::new(
                Values::One(*pair),
                without(cards, &[*pair]),
            )),
            _ => None,
        }
    }
}

impl Classifier for TwoPair {
    fn category(&self) -> Category {
        Category::TwoPair
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        if cards.len() < 4 {
            return None;
        }
        match Counts::from(cards).exactly(2).as_slice() {
            [hi, lo] => Some(Classification::new(
                Values::Two(*hi, *lo),
                without(cards, &[*hi, *lo]),
            )),
            _ => None,
        }
    }
}

impl Classifier for ThreeOfAKind {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        let counts = Counts::from(cards);
        if counts.most() != 3 || !counts.exactly(2).is_empty() {
            return None;
        }
        match counts.exactly(3).as_slice() {
            [triple] => Some(Classification::new(
                Values::One(*triple),
                without(cards, &[*triple]),
            )),
            _ => None,
        }
    }
}

/// Distinct ranks forming one contiguous run over 2..A. Ace is only ever
/// high, so A-2-3-4-5 does not qualify.
impl Classifier for Straight {
    fn category(&self) -> Category {
        Category::Straight
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        if cards.len() < 5 {
            return None;
        }
        let mut ranks = cards.iter().map(Card::rank).collect::<Vec<Rank>>();
        ranks.sort();
        ranks
            .windows(2)
            .all(|w| w[0].succ() == Some(w[1]))
            .then(|| Classification::whole(Values::One(ranks[0])))
    }
}

impl Classifier for Flush {
    fn category(&self) -> Category {
        Category::Flush
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        if cards.len() < 5 {
            return None;
        }
        let suit = cards[0].suit();
        if cards.iter().any(|c| c.suit() != suit) {
            return None;
        }
        let high = cards.iter().map(Card::rank).max()?;
        Some(Classification::whole(Values::One(high)))
    }
}

impl Classifier for FullHouse {
    fn category(&self) -> Category {
        Category::FullHouse
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        let counts = Counts::from(cards);
        if counts.distinct() != 2 {
            return None;
        }
        match (counts.exactly(3).as_slice(), counts.exactly(2).as_slice()) {
            ([triple], [pair]) => Some(Classification::whole(Values::Two(*triple, *pair))),
            _ => None,
        }
    }
}

impl Classifier for FourOfAKind {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        match Counts::from(cards).exactly(4).as_slice() {
            [quad] => Some(Classification::new(
                Values::One(*quad),
                without(cards, &[*quad]),
            )),
            _ => None,
        }
    }
}

impl Classifier for StraightFlush {
    fn category(&self) -> Category {
        Category::StraightFlush
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        Flush.classify(cards).and_then(|_| Straight.classify(cards))
    }
}

impl Classifier for RoyalFlush {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }
    fn classify(&self, cards: &[Card]) -> Option<Classification> {
        StraightFlush
            .classify(cards)
            .filter(|c| c.values() == Values::One(Rank::Ten))
            .map(|_| Classification::whole(Values::Royal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Hand;

    fn classify(classifier: &dyn Classifier, hand: &str) -> Option<(Values, Vec<String>)> {
        let hand = Hand::try_from(hand).unwrap();
        classifier.classify(hand.cards()).map(|c| {
            let rest = c.remaining().iter().map(Card::to_string).collect();
            (c.values(), rest)
        })
    }

    fn rest(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn registry_follows_category_order() {
        for (classifier, category) in CLASSIFIERS.iter().zip(Category::all()) {
            assert_eq!(classifier.category(), category);
        }
    }

    #[test]
    fn high_card() {
        assert_eq!(
            classify(&HighCard, "2H 2C 2S 2D 4D"),
            Some((Values::One(Rank::Four), rest(&["2H", "2C", "2S", "2D"])))
        );
        assert_eq!(
            classify(&HighCard, "2H AC QS TS 4D"),
            Some((Values::One(Rank::Ace), rest(&["2H", "QS", "TS", "4D"])))
        );
    }

    #[test]
    fn high_card_consumes_one_card() {
        assert_eq!(
            classify(&HighCard, "KH 3C KS 5D 9D"),
            Some((Values::One(Rank::King), rest(&["3C", "KS", "5D", "9D"])))
        );
        assert_eq!(HighCard.classify(&[]), None);
    }

    #[test]
    fn one_pair() {
        assert_eq!(
            classify(&OnePair, "AH AC 3S 7H 4D"),
            Some((Values::One(Rank::Ace), rest(&["3S", "7H", "4D"])))
        );
    }

    #[test]
    fn one_pair_rejects_stronger_patterns() {
        assert_eq!(classify(&OnePair, "AH AC 3S 3H 4D"), None);
        assert_eq!(classify(&OnePair, "TH TC 3S 3H 3D"), None);
        assert_eq!(classify(&OnePair, "2H 3C 4S 5S 8D"), None);
    }

    #[test]
    fn two_pair() {
        assert_eq!(
            classify(&TwoPair, "AH AC KS KH 4D"),
            Some((Values::Two(Rank::Ace, Rank::King), rest(&["4D"])))
        );
        assert_eq!(
            classify(&TwoPair, "4D 2H KS 2C KH"),
            Some((Values::Two(Rank::King, Rank::Two), rest(&["4D"])))
        );
    }

    #[test]
    fn two_pair_needs_four_cards() {
        let cards = Hand::try_from("AH AC KS KH 4D").unwrap();
        assert!(TwoPair.classify(&cards.cards()[..3]).is_none());
        assert!(TwoPair.classify(&cards.cards()[..4]).is_some());
    }

    #[test]
    fn three_of_a_kind() {
        assert_eq!(
            classify(&ThreeOfAKind, "AH 2C KS KH KD"),
            Some((Values::One(Rank::King), rest(&["AH", "2C"])))
        );
    }

    #[test]
    fn three_of_a_kind_rejects_full_house() {
        assert_eq!(classify(&ThreeOfAKind, "AH AC KS KH KD"), None);
        assert_eq!(classify(&ThreeOfAKind, "KC AC KS KH KD"), None);
    }

    #[test]
    fn straight() {
        assert_eq!(
            classify(&Straight, "AH TC QS KH JD"),
            Some((Values::One(Rank::Ten), rest(&[])))
        );
        assert_eq!(
            classify(&Straight, "3H 6C 2S 5H 4D"),
            Some((Values::One(Rank::Two), rest(&[])))
        );
    }

    #[test]
    fn straight_is_ace_high_only() {
        assert_eq!(classify(&Straight, "AH 2C 3S 4H 5D"), None);
        assert_eq!(classify(&Straight, "QH KC AS 2H 3D"), None);
    }

    #[test]
    fn straight_rejects_gaps_and_duplicates() {
        assert_eq!(classify(&Straight, "2H 3C 4S 5S 7D"), None);
        assert_eq!(classify(&Straight, "2H 3C 4S 5S 5D"), None);
    }

    #[test]
    fn flush() {
        assert_eq!(
            classify(&Flush, "3H 6H 2H 5H 4H"),
            Some((Values::One(Rank::Six), rest(&[])))
        );
        assert_eq!(classify(&Flush, "3H 6H 2H 5H 4C"), None);
    }

    #[test]
    fn full_house() {
        assert_eq!(
            classify(&FullHouse, "3S 6H 6D 3H 3D"),
            Some((Values::Two(Rank::Three, Rank::Six), rest(&[])))
        );
        assert_eq!(classify(&FullHouse, "3S 3H 6D 3C 3D"), None);
    }

    #[test]
    fn four_of_a_kind() {
        assert_eq!(
            classify(&FourOfAKind, "3S 3H 6D 3C 3D"),
            Some((Values::One(Rank::Three), rest(&["6D"])))
        );
        assert_eq!(classify(&FourOfAKind, "3S 3H 6D 6C 3D"), None);
    }

    #[test]
    fn straight_flush() {
        assert_eq!(
            classify(&StraightFlush, "3H 6H 2H 5H 4H"),
            Some((Values::One(Rank::Two), rest(&[])))
        );
        assert_eq!(classify(&StraightFlush, "3H 6H 2H 5H 4C"), None);
    }

    #[test]
    fn royal_flush() {
        assert_eq!(
            classify(&RoyalFlush, "AH TH KH JH QH"),
            Some((Values::Royal, rest(&[])))
        );
        assert_eq!(classify(&RoyalFlush, "9H TH KH JH QH"), None);
        assert_eq!(classify(&RoyalFlush, "AH TC KH JH QH"), None);
    }

    #[test]
    fn consumed_and_remaining_reconstruct_hand() {
        for _ in 0..256 {
            let hand = Hand::random();
            for classifier in CLASSIFIERS {
                if let Some(found) = classifier.classify(hand.cards()) {
                    let consumed = hand.cards().len() - found.remaining().len();
                    assert!(found.remaining().iter().all(|c| hand.cards().contains(c)));
                    let expected = match classifier.category() {
                        Category::HighCard => 1,
                        Category::OnePair => 2,
                        Category::TwoPair => 4,
                        Category::ThreeOfAKind => 3,
                        Category::FourOfAKind => 4,
                        _ => 5,
                    };
                    assert_eq!(consumed, expected, "{} as {}", hand, classifier.category());
                }
            }
        }
    }
}
