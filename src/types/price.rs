use serde::Serialize;
use std::fmt;

/// A stock price as read from input. Signed 32-bit, same range the input
/// format allows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(i32);

impl Price {
    pub fn define(price: i32) -> Self {
        Self(price)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
