use crate::error::InvalidInputError;
use crate::search::SearchMode;
use crate::types::price::Price;
use crate::types::query::{Query, QueryOutcome};

/// Ascending, immutable working set of prices for one run.
///
/// Duplicates are kept as repeated entries. There is no way to mutate the
/// list after `build`, so sorted order holds for its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceList {
    prices: Box<[Price]>,
}

impl PriceList {
    /// Sort `prices` ascending. Fails on an empty input since every query
    /// bounds-checks against the last element.
    pub fn build(mut prices: Vec<Price>) -> Result<Self, InvalidInputError> {
        if prices.is_empty() {
            return Err(InvalidInputError::EmptyPriceList);
        }

        // Equal prices are indistinguishable, no need for a stable sort
        prices.sort_unstable();

        Ok(Self {
            prices: prices.into_boxed_slice(),
        })
    }

    pub fn query(&self, query: Query, mode: SearchMode) -> QueryOutcome {
        mode.strategy().find(&self.prices, query.price())
    }

    pub fn as_slice(&self) -> &[Price] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Always false for a built list, kept for the usual `len` pairing
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn min(&self) -> Price {
        self.prices[0]
    }

    pub fn max(&self) -> Price {
        self.prices[self.prices.len() - 1]
    }
}
