//! Five-card poker hand classification and head-to-head comparison.
//!
//! ## Core
//!
//! - [`cards`] — [`Rank`](cards::Rank), [`Suit`](cards::Suit),
//!   [`Card`](cards::Card) and the five-card [`Hand`](cards::Hand)
//! - [`evaluation`] — one classifier per category, the resolver that picks
//!   the strongest, and the comparator that orders two hands
//!
//! ## Harness
//!
//! - [`batch`] — one matchup per line, win counting, summary
//! - `cli` — the `pokerhands` binary (feature `cli`)
pub mod batch;
pub mod cards;
pub mod evaluation;

#[cfg(feature = "cli")]
pub mod cli;

pub use evaluation::classify;
pub use evaluation::compare;
