use super::card::Card;
use super::error::Error;

/// Cards in a well-formed hand.
pub const HAND_SIZE: usize = 5;

/// An ordered sequence of exactly five cards.
///
/// Classification treats the hand as a multiset, but the given order is
/// kept so that leftover cards come out in a well-defined order. Identical
/// cards may repeat; deck integrity is not checked here.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    /// Five distinct cards dealt from a freshly shuffled deck.
    pub fn random() -> Self {
        use rand::seq::SliceRandom;
        let ref mut rng = rand::rng();
        let mut deck = Card::deck().collect::<Vec<Card>>();
        deck.shuffle(rng);
        Self(std::array::from_fn(|i| deck[i]))
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }
}

impl TryFrom<&[Card]> for Hand {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        <[Card; HAND_SIZE]>::try_from(cards)
            .map(Self)
            .map_err(|_| Error::MalformedHand(cards.len()))
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = Error;
    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::try_from(cards.as_slice())
    }
}

/// str isomorphism
/// whitespace-separated tokens, e.g. "AH TH KH JH QH"
impl TryFrom<&str> for Hand {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, Error>>()
            .and_then(Self::try_from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let tokens = self.0.iter().map(Card::to_string).collect::<Vec<_>>();
        write!(f, "{}", tokens.join(" "))
    }
}
