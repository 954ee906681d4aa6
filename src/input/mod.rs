use crate::error::InputParseError;
use crate::types::price::Price;
use crate::types::query::Query;
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, warn};

/// Upper bound on query slots reserved up front. Counts come from input and
/// are only trusted once the lines behind them have been read.
const MAX_QUERY_PREALLOC: usize = 4096;

/// Everything read from one input stream, before any sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub prices: Vec<Price>,
    pub queries: Vec<Query>,
}

/// Read the whole stream into memory, then parse it.
pub fn read_batch<R: Read>(mut reader: R) -> Result<Batch, InputParseError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    debug!(bytes = text.len(), "input read");
    parse_batch(&text)
}

/// Parse the line-oriented input format:
///
/// ```text
/// N
/// p1 p2 ... pN
/// Q
/// q1
/// ...
/// qQ
/// ```
///
/// Price tokens past the N-th are ignored, as is anything after the Q-th query.
pub fn parse_batch(text: &str) -> Result<Batch, InputParseError> {
    let mut lines = Lines::new(text);

    let (line, raw) = lines.next_line("price count")?;
    let price_count: usize = parse_token(raw.trim(), line, "price count")?;

    let (line, raw) = lines.next_line("price list")?;
    let mut tokens = raw.split_whitespace();
    // A price token takes at least two bytes with its separator
    let mut prices = Vec::with_capacity(price_count.min(raw.len() / 2 + 1));
    for token in tokens.by_ref().take(price_count) {
        prices.push(Price::define(parse_token(token, line, "price")?));
    }
    if prices.len() < price_count {
        return Err(InputParseError::TooFewPrices {
            line,
            expected: price_count,
            found: prices.len(),
        });
    }
    let extra = tokens.count();
    if extra > 0 {
        warn!(line, extra, "ignoring price tokens beyond the declared count");
    }

    let (line, raw) = lines.next_line("query count")?;
    let query_count: usize = parse_token(raw.trim(), line, "query count")?;

    let mut queries = Vec::with_capacity(query_count.min(MAX_QUERY_PREALLOC));
    for _ in 0..query_count {
        let (line, raw) = lines.next_line("query")?;
        queries.push(Query::define(parse_token(raw.trim(), line, "query")?));
    }

    debug!(prices = prices.len(), queries = queries.len(), "batch parsed");
    Ok(Batch { prices, queries })
}

fn parse_token<T: FromStr>(
    token: &str,
    line: usize,
    expected: &'static str,
) -> Result<T, InputParseError> {
    token.parse().map_err(|_| InputParseError::InvalidInteger {
        line,
        token: token.to_string(),
        expected,
    })
}

/// Line iterator that tracks the 1-based line number for diagnostics
struct Lines<'a> {
    inner: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            inner: text.lines(),
            line: 0,
        }
    }

    fn next_line(&mut self, expected: &'static str) -> Result<(usize, &'a str), InputParseError> {
        self.line += 1;
        let line = self.line;
        self.inner
            .next()
            .map(|raw| (line, raw))
            .ok_or(InputParseError::MissingLine { line, expected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(batch: &Batch) -> (Vec<i32>, Vec<i32>) {
        (
            batch.prices.iter().map(Price::value).collect(),
            batch.queries.iter().map(Query::value).collect(),
        )
    }

    #[test]
    fn test_parse_well_formed_batch() {
        let batch = parse_batch("5\n3 1 4 1 5\n3\n4\n2\n10\n").expect("valid input");

        let (prices, queries) = values(&batch);
        assert_eq!(prices, vec![3, 1, 4, 1, 5]);
        assert_eq!(queries, vec![4, 2, 10]);
    }

    #[test]
    fn test_parse_tolerates_crlf_and_padding() {
        let batch = parse_batch("2\r\n  -7   8 \r\n1\r\n 8 \r\n").expect("valid input");

        let (prices, queries) = values(&batch);
        assert_eq!(prices, vec![-7, 8]);
        assert_eq!(queries, vec![8]);
    }

    #[test]
    fn test_parse_ignores_extra_prices_and_trailing_lines() {
        let batch = parse_batch("2\n1 2 3 4\n1\n2\nleftover\n").expect("valid input");

        let (prices, queries) = values(&batch);
        assert_eq!(prices, vec![1, 2]);
        assert_eq!(queries, vec![2]);
    }

    #[test]
    fn test_parse_zero_prices_is_not_a_parse_error() {
        let batch = parse_batch("0\n\n0\n").expect("parses; rejected later by PriceList");
        assert!(batch.prices.is_empty());
        assert!(batch.queries.is_empty());
    }

    #[test]
    fn test_parse_reports_missing_line() {
        let err = parse_batch("3\n1 2 3\n2\n5\n").unwrap_err();
        match err {
            InputParseError::MissingLine { line, expected } => {
                assert_eq!(line, 5);
                assert_eq!(expected, "query");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_reports_bad_token_with_line() {
        let err = parse_batch("3\n1 x 3\n0\n").unwrap_err();
        assert_eq!(err.to_string(), "line 2: `x` is not a valid price");
    }

    #[test]
    fn test_parse_rejects_negative_count() {
        let err = parse_batch("-1\n\n0\n").unwrap_err();
        assert!(matches!(
            err,
            InputParseError::InvalidInteger { line: 1, .. }
        ));
    }

    #[test]
    fn test_parse_reports_short_price_line() {
        let err = parse_batch("4\n1 2\n0\n").unwrap_err();
        assert!(matches!(
            err,
            InputParseError::TooFewPrices {
                line: 2,
                expected: 4,
                found: 2
            }
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_price() {
        let err = parse_batch("1\n99999999999\n0\n").unwrap_err();
        assert!(matches!(err, InputParseError::InvalidInteger { line: 2, .. }));
    }

    #[test]
    fn test_parse_huge_price_count_fails_cleanly() {
        let err = parse_batch("18446744073709551615\n1\n0\n").unwrap_err();
        assert!(matches!(
            err,
            InputParseError::TooFewPrices {
                line: 2,
                expected: usize::MAX,
                found: 1
            }
        ));
    }

    #[test]
    fn test_parse_huge_query_count_fails_cleanly() {
        let err = parse_batch("1\n1\n18446744073709551615\n1\n").unwrap_err();
        assert!(matches!(
            err,
            InputParseError::MissingLine {
                line: 5,
                expected: "query"
            }
        ));
    }

    #[test]
    fn test_read_batch_from_reader() {
        let input = std::io::Cursor::new("1\n7\n1\n7\n");
        let batch = read_batch(input).expect("valid input");
        assert_eq!(batch.prices, vec![Price::define(7)]);
    }
}
