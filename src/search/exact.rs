use crate::search::{PriceSearch, converge_index};
use crate::types::price::Price;
use crate::types::query::QueryOutcome;

/// Binary search that re-checks the converged element and reports a miss
/// when it differs from the target.
#[derive(Copy, Clone, Debug, Default)]
pub struct ExactSearch;

impl PriceSearch for ExactSearch {
    fn name(&self) -> &'static str {
        "exact"
    }

    fn find(&self, sorted: &[Price], target: Price) -> QueryOutcome {
        match converge_index(sorted, target) {
            Some(idx) if sorted[idx] == target => QueryOutcome::Match(target),
            _ => QueryOutcome::Miss,
        }
    }
}
