use crate::book::PriceList;
use crate::config::Config;
use crate::error::PriceQueryError;
use crate::input::{Batch, read_batch};
use crate::output::ResultWriter;
use crate::perf::{LatencyRecorder, LatencySummary, calibrate_ticks_per_ns};
use serde::Serialize;
use std::io::{Read, Write};
use tracing::{debug, info};

/// Counts for a finished run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub prices: usize,
    pub queries: usize,
    /// Exact matches only
    pub matches: usize,
    /// Queries answered with a neighbouring price (converged mode)
    pub converged: usize,
    pub misses: usize,
    pub latency: Option<LatencySummary>,
}

/// Parse, sort, answer every query in order.
pub struct PriceQueryProcessor {
    config: Config,
}

impl PriceQueryProcessor {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read the full input, then write one record per query to `output`.
    /// Nothing is written if the input fails to parse or has no prices.
    pub fn run<R: Read, W: Write>(
        &self,
        input: R,
        output: W,
    ) -> Result<RunSummary, PriceQueryError> {
        let batch = read_batch(input)?;
        self.process(batch, output)
    }

    pub fn process<W: Write>(
        &self,
        batch: Batch,
        output: W,
    ) -> Result<RunSummary, PriceQueryError> {
        let Batch { prices, queries } = batch;

        let list = PriceList::build(prices)?;
        debug!(
            prices = list.len(),
            min = list.min().value(),
            max = list.max().value(),
            "price list built"
        );

        let mode = self.config.mode;
        let mut writer = ResultWriter::new(self.config.format, output)?;
        let mut recorder = self
            .config
            .latency
            .then(|| LatencyRecorder::new(queries.len()));
        let mut matches = 0;
        let mut converged = 0;

        for &query in &queries {
            let outcome = match recorder.as_mut() {
                Some(recorder) => recorder.record(|| list.query(query, mode)),
                None => list.query(query, mode),
            };
            if outcome.is_match() {
                matches += 1;
            } else if outcome.is_converged() {
                converged += 1;
            }
            writer.write(query, outcome)?;
        }
        writer.finish()?;

        let latency = match recorder.as_mut() {
            Some(recorder) => recorder.summary(calibrate_ticks_per_ns()),
            None => None,
        };

        let summary = RunSummary {
            prices: list.len(),
            queries: queries.len(),
            matches,
            converged,
            misses: queries.len() - matches - converged,
            latency,
        };
        info!(
            mode = mode.strategy().name(),
            prices = summary.prices,
            queries = summary.queries,
            matches = summary.matches,
            converged = summary.converged,
            misses = summary.misses,
            "run complete"
        );
        if let Some(latency) = &summary.latency {
            info!(
                samples = latency.samples,
                p50_ns = latency.p50_ns,
                p99_ns = latency.p99_ns,
                max_ns = latency.max_ns,
                "query latency"
            );
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InputParseError, InvalidInputError};
    use crate::search::SearchMode;

    fn run(input: &str, config: Config) -> (Result<RunSummary, PriceQueryError>, String) {
        let mut out = Vec::new();
        let result = PriceQueryProcessor::new(config).run(input.as_bytes(), &mut out);
        (result, String::from_utf8(out).expect("utf8"))
    }

    #[test]
    fn test_run_counts_matches() {
        let (result, out) = run("5\n3 1 4 1 5\n3\n4\n2\n10\n", Config::default());

        let summary = result.expect("valid run");
        assert_eq!(out, "4\n-1\n-1\n");
        assert_eq!(summary.prices, 5);
        assert_eq!(summary.queries, 3);
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.converged, 0);
        assert_eq!(summary.misses, 2);
        assert!(summary.latency.is_none());
    }

    #[test]
    fn test_run_converged_mode() {
        let config = Config::default().with_mode(SearchMode::Converged);
        let (result, out) = run("1\n7\n3\n7\n8\n6\n", config);

        assert_eq!(out, "7\n-1\n7\n");
        let summary = result.expect("valid run");
        assert_eq!(summary.matches, 1);
        assert_eq!(summary.converged, 1);
        assert_eq!(summary.misses, 1);
    }

    #[test]
    fn test_run_with_latency() {
        let config = Config::default().with_latency(true);
        let (result, _) = run("3\n1 2 3\n2\n1\n3\n", config);

        let latency = result.expect("valid run").latency.expect("latency enabled");
        assert_eq!(latency.samples, 2);
    }

    #[test]
    fn test_empty_price_list_is_rejected_without_output() {
        let (result, out) = run("0\n\n1\n5\n", Config::default());

        assert!(matches!(
            result,
            Err(PriceQueryError::InvalidInput(InvalidInputError::EmptyPriceList))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_error_is_propagated_without_output() {
        let (result, out) = run("2\n1 2\n2\n1\nabc\n", Config::default());

        assert!(matches!(
            result,
            Err(PriceQueryError::Parse(InputParseError::InvalidInteger { line: 5, .. }))
        ));
        assert!(out.is_empty());
    }
}
