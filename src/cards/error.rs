/// Failures while turning text into cards and hands.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid card token: {0:?}")]
    InvalidCardToken(String),
    #[error("malformed hand: expected {expected} cards, found {0}", expected = super::hand::HAND_SIZE)]
    MalformedHand(usize),
}
