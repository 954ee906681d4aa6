use thiserror::Error;

/// Input could not be read or a line did not hold what the format expects.
/// Line numbers are 1-based.
#[derive(Error, Debug)]
pub enum InputParseError {
    #[error("line {line}: expected {expected}, found end of input")]
    MissingLine { line: usize, expected: &'static str },

    #[error("line {line}: `{token}` is not a valid {expected}")]
    InvalidInteger {
        line: usize,
        token: String,
        expected: &'static str,
    },

    #[error("line {line}: expected {expected} prices, found {found}")]
    TooFewPrices {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("failed to read input")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("price list is empty, at least one price is required")]
    EmptyPriceList,
}

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write output")]
    Io(#[from] std::io::Error),

    #[error("failed to write csv record")]
    Csv(#[from] csv::Error),

    #[error("failed to write json record")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum PriceQueryError {
    #[error(transparent)]
    Parse(#[from] InputParseError),

    #[error("invalid input")]
    InvalidInput(#[from] InvalidInputError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
