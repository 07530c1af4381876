//! Hand classification and head-to-head comparison.
//!
//! - [`Classifier`] — one per [`Category`], returning a [`Classification`]
//! - [`Evaluator`] — picks the strongest matching category as a [`RankedHand`]
//! - [`Showdown`] — totally orders two ranked hands, kickers included
//!
//! Everything here is pure; nothing is cached between calls.
pub mod category;
pub use category::*;

pub mod classification;
pub use classification::*;

pub mod classifier;
pub use classifier::*;

pub mod evaluator;
pub use evaluator::*;

pub mod ranked;
pub use ranked::*;

pub mod showdown;
pub use showdown::*;

pub mod values;
pub use values::*;
