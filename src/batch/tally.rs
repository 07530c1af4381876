use super::matchup::Matchup;
use super::summary::Summary;
use crate::cards;
use std::cmp::Ordering;

/// What to do with a line that does not parse into a matchup.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Stop at the first malformed line.
    #[default]
    Abort,
    /// Skip it, log a warning, and count it as skipped.
    Skip,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: cards::Error,
    },
}

/// Counts first-hand wins over a batch of input lines.
///
/// Lines are independent, so each is parsed and settled on its own (in
/// parallel with the `cli` feature) and only the outcomes are reduced in
/// line order. Blank lines are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tally {
    policy: Policy,
}

impl From<Policy> for Tally {
    fn from(policy: Policy) -> Self {
        Self { policy }
    }
}

impl Tally {
    pub fn count(&self, text: &str) -> Result<Summary, Error> {
        let lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line))
            .filter(|(_, line)| !line.trim().is_empty())
            .collect::<Vec<(usize, &str)>>();
        log::debug!("settling {} matchups", lines.len());
        Self::settle(&lines)
            .into_iter()
            .try_fold(Summary::default(), |summary, (line, outcome)| {
                match outcome {
                    Ok(ordering) => {
                        log::debug!("line {:>6}: {:?}", line, ordering);
                        Ok(summary.record(ordering))
                    }
                    Err(source) => match self.policy {
                        Policy::Abort => Err(Error::Line { line, source }),
                        Policy::Skip => {
                            log::warn!("skipping line {}: {}", line, source);
                            Ok(summary.skip())
                        }
                    },
                }
            })
    }

    #[cfg(feature = "cli")]
    fn settle(lines: &[(usize, &str)]) -> Vec<(usize, Result<Ordering, cards::Error>)> {
        use rayon::iter::IntoParallelRefIterator;
        use rayon::iter::ParallelIterator;
        lines
            .par_iter()
            .map(|&(i, line)| (i, Matchup::try_from(line).map(|m| m.winner())))
            .collect()
    }

    #[cfg(not(feature = "cli"))]
    fn settle(lines: &[(usize, &str)]) -> Vec<(usize, Result<Ordering, cards::Error>)> {
        lines
            .iter()
            .map(|&(i, line)| (i, Matchup::try_from(line).map(|m| m.winner())))
            .collect()
    }
}
