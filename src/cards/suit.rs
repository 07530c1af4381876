use super::error::Error;

/// Card suit: clubs, diamonds, hearts, spades.
///
/// Suits carry no strength; they only matter for flush detection.
/// The derived ordering exists for canonical iteration and is never
/// consulted when comparing hands.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Suit {
    #[default]
    C = 0,
    D = 1,
    H = 2,
    S = 3,
}

impl Suit {
    /// All four suits in canonical order.
    pub const fn all() -> [Suit; 4] {
        [Suit::C, Suit::D, Suit::H, Suit::S]
    }
    pub fn symbol(&self) -> char {
        match self {
            Suit::C => 'C',
            Suit::D => 'D',
            Suit::H => 'H',
            Suit::S => 'S',
        }
    }
}

/// u8 isomorphism
impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n {
            0 => Suit::C,
            1 => Suit::D,
            2 => Suit::H,
            3 => Suit::S,
            _ => unreachable!("invalid suit"),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// char parsing, strict `HDSC`
impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' => Ok(Suit::C),
            'D' => Ok(Suit::D),
            'H' => Ok(Suit::H),
            'S' => Ok(Suit::S),
            _ => Err(Error::InvalidCardToken(c.to_string())),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
