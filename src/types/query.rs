use crate::types::price::Price;
use std::fmt;

/// Sentinel printed when a query has no answer.
pub const MISS_SENTINEL: i32 = -1;

/// A single lookup request against a `PriceList`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Query(Price);

impl Query {
    pub fn define(value: i32) -> Self {
        Self(Price::define(value))
    }

    pub fn price(&self) -> Price {
        self.0
    }

    pub fn value(&self) -> i32 {
        self.0.value()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The query equals a listed price
    Match(Price),
    /// No exact match; the search reports the price it converged on instead
    Converged(Price),
    Miss,
}

impl QueryOutcome {
    /// The integer written to output, `-1` on a miss
    pub fn reported(&self) -> i32 {
        match self {
            QueryOutcome::Match(price) | QueryOutcome::Converged(price) => price.value(),
            QueryOutcome::Miss => MISS_SENTINEL,
        }
    }

    /// True only for an exact match
    pub fn is_match(&self) -> bool {
        matches!(self, QueryOutcome::Match(_))
    }

    pub fn is_converged(&self) -> bool {
        matches!(self, QueryOutcome::Converged(_))
    }
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reported())
    }
}
