pub mod card;
pub use card::*;

pub mod error;
pub use error::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod suit;
pub use suit::*;
