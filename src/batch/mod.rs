//! Line-oriented batch harness around the evaluation core.
pub mod matchup;
pub use matchup::*;

pub mod summary;
pub use summary::*;

pub mod tally;
pub use tally::*;
