use crate::search::{PriceSearch, converge_index};
use crate::types::price::Price;
use crate::types::query::QueryOutcome;

/// Binary search that returns the element it converged on even when it is
/// not the target. A query inside the price range always yields a price,
/// tagged `Converged` when it is a neighbour. Only queries above the maximum
/// miss.
#[derive(Copy, Clone, Debug, Default)]
pub struct ConvergedSearch;

impl PriceSearch for ConvergedSearch {
    fn name(&self) -> &'static str {
        "converged"
    }

    fn find(&self, sorted: &[Price], target: Price) -> QueryOutcome {
        match converge_index(sorted, target) {
            Some(idx) if sorted[idx] == target => QueryOutcome::Match(target),
            Some(idx) => QueryOutcome::Converged(sorted[idx]),
            None => QueryOutcome::Miss,
        }
    }
}
