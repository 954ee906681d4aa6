use crate::types::price::Price;
use crate::types::query::QueryOutcome;
use clap::ValueEnum;
use std::cmp::Ordering;

pub mod converged;
pub mod exact;

pub use converged::ConvergedSearch;
pub use exact::ExactSearch;

/// Common trait for the lookup strategies over an ascending price slice.
/// Lets the processor and the benches drive every strategy the same way.
pub trait PriceSearch {
    /// Human readable name, used in logs and bench ids
    fn name(&self) -> &'static str;

    /// Look up `target` in `sorted`, which must be ascending.
    /// An empty slice always yields `QueryOutcome::Miss`.
    fn find(&self, sorted: &[Price], target: Price) -> QueryOutcome;
}

/// How a query with no exact match inside the price range is answered
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchMode {
    /// Report -1 unless the query equals a listed price
    #[default]
    Exact,
    /// Report whatever element the search converged on (legacy behaviour)
    Converged,
}

impl SearchMode {
    pub fn strategy(self) -> &'static dyn PriceSearch {
        match self {
            SearchMode::Exact => &ExactSearch,
            SearchMode::Converged => &ConvergedSearch,
        }
    }
}

/// Binary search over the closed range [0, len-1].
///
/// Stops early on equality. Otherwise narrows until `low == high`, which
/// leaves `low` on the first element >= `target` when `target <= max`.
/// Returns `None` for an empty slice or when `target` exceeds the last
/// element (bounds fast path).
pub fn converge_index(sorted: &[Price], target: Price) -> Option<usize> {
    let max = sorted.last()?;
    if target > *max {
        return None;
    }

    let mut low = 0;
    let mut high = sorted.len() - 1;
    while low < high {
        let mid = low + (high - low) / 2;
        match sorted[mid].cmp(&target) {
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
            Ordering::Equal => break,
        }
    }

    // mid on early break, low once the range has collapsed
    Some(low + (high - low) / 2)
}
