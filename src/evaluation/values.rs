use crate::cards::Rank;

/// The rank(s) that make a category match.
///
/// One(r)      high card, pair, trips, straight (low end), flush (high card), quads
/// Two(hi, lo) two pair (high pair first), full house (triple first)
/// Royal       royal flush, which needs no rank to order it
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Values {
    One(Rank),
    Two(Rank, Rank),
    Royal,
}

impl Values {
    /// Defining ranks in comparison order.
    pub fn ranks(self) -> impl Iterator<Item = Rank> {
        match self {
            Values::One(r) => [Some(r), None],
            Values::Two(a, b) => [Some(a), Some(b)],
            Values::Royal => [None, None],
        }
        .into_iter()
        .flatten()
    }
}

impl std::fmt::Display for Values {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.ranks() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
