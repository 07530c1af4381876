use super::error::Error;
use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. Equality is by the `(Rank, Suit)` pair; two cards
/// sharing a Rank are duplicates for pairing purposes whatever their Suit.
///
/// Cards parse from two-character tokens like `"AH"` (ace of hearts) or
/// `"TC"` (ten of clubs).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }

    /// The full 52-card deck, sorted by rank then suit.
    pub fn deck() -> impl Iterator<Item = Card> {
        (0..52u8).map(Card)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// TS
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(u), None) => Rank::try_from(r)
                .and_then(|rank| Suit::try_from(u).map(|suit| Card::from((rank, suit))))
                .map_err(|_| Error::InvalidCardToken(s.to_string())),
            _ => Err(Error::InvalidCardToken(s.to_string())),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

/// serialized as its two-character token
impl serde::Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
impl<'de> serde::Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Card::try_from(token.as_str()).map_err(serde::de::Error::custom)
    }
}
