use crate::cards::Card;
use crate::cards::Error;
use crate::cards::HAND_SIZE;
use crate::cards::Hand;
use crate::evaluation::Showdown;
use std::cmp::Ordering;

/// One input line: two hands dealt head to head.
///
/// Tokens 1-5 form the first hand, tokens 6-10 the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    hero: Hand,
    villain: Hand,
}

impl Matchup {
    pub fn hero(&self) -> &Hand {
        &self.hero
    }
    pub fn villain(&self) -> &Hand {
        &self.villain
    }
    pub fn showdown(&self) -> Showdown {
        Showdown::from((&self.hero, &self.villain))
    }
    /// Greater when the first hand wins.
    pub fn winner(&self) -> Ordering {
        self.showdown().settle()
    }
    /// Both hands with their categories and the outcome, for tracing.
    pub fn explain(&self) -> String {
        let showdown = self.showdown();
        format!(
            "{} ({}) vs {} ({}) => {:?}",
            self.hero,
            showdown.hero(),
            self.villain,
            showdown.villain(),
            showdown.settle()
        )
    }
}

impl From<(Hand, Hand)> for Matchup {
    fn from((hero, villain): (Hand, Hand)) -> Self {
        Self { hero, villain }
    }
}

/// str isomorphism
/// "AH TH KH JH QH 2C 2S 2S 2D 4D"
impl TryFrom<&str> for Matchup {
    type Error = Error;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let cards = line
            .split_whitespace()
            .map(Card::try_from)
            .collect::<Result<Vec<Card>, Error>>()?;
        let (hero, villain) = cards.split_at(cards.len().min(HAND_SIZE));
        let hero = Hand::try_from(hero)?;
        let villain = Hand::try_from(villain)?;
        Ok(Self { hero, villain })
    }
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.hero, self.villain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_line_in_two() {
        let matchup = Matchup::try_from("AH TH KH JH QH 2C 2S 2S 2D 4D").unwrap();
        assert_eq!(matchup.hero().to_string(), "AH TH KH JH QH");
        assert_eq!(matchup.villain().to_string(), "2C 2S 2S 2D 4D");
        assert_eq!(matchup.winner(), Ordering::Greater);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let matchup = Matchup::try_from("  2H 3C 4S 5S 8D\t2C 3S 4S 5D 9D\r\n").unwrap();
        assert_eq!(matchup.winner(), Ordering::Less);
    }

    #[test]
    fn short_and_long_lines_are_malformed() {
        assert_eq!(
            Matchup::try_from("AH TH KH JH QH 2C 2S 2S 2D"),
            Err(Error::MalformedHand(4))
        );
        assert_eq!(
            Matchup::try_from("AH TH KH JH QH 2C 2S 2S 2D 4D 5D"),
            Err(Error::MalformedHand(6))
        );
        assert_eq!(Matchup::try_from("AH TH"), Err(Error::MalformedHand(2)));
    }

    #[test]
    fn bad_tokens_are_reported() {
        assert_eq!(
            Matchup::try_from("AH TH KH JH QH 2C 2S 2S 2D 1D"),
            Err(Error::InvalidCardToken("1D".into()))
        );
    }

    #[test]
    fn explain_names_both_categories() {
        let matchup = Matchup::try_from("3S 6H 6D 3H 3D AH TH KH JH QH").unwrap();
        assert_eq!(
            matchup.explain(),
            "3S 6H 6D 3H 3D (FullHouse 36) vs AH TH KH JH QH (RoyalFlush) => Less"
        );
    }
}
