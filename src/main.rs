use anyhow::{Context, Result};
use clap::Parser;
use price_query::output::OutputFormat;
use price_query::{Config, PriceQueryProcessor, SearchMode};
use std::io::{self, BufWriter};
use tracing_subscriber::EnvFilter;

/// Answer exact-match price lookups against a sorted price list.
///
/// Reads N, the N prices, Q, then Q queries from stdin and prints one
/// result per query to stdout (`-1` when there is no match).
#[derive(Parser, Debug)]
#[command(name = "price-query", version)]
struct Cli {
    /// How to answer queries that fall inside the price range without an exact match
    #[arg(long, value_enum, env = "PRICE_QUERY_MODE", default_value_t = SearchMode::Exact)]
    mode: SearchMode,

    /// Output record format
    #[arg(long, value_enum, env = "PRICE_QUERY_FORMAT", default_value_t = OutputFormat::Plain)]
    format: OutputFormat,

    /// Time each query and log a latency summary to stderr
    #[arg(long, env = "PRICE_QUERY_LATENCY", default_value_t = false)]
    latency: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config::default()
            .with_mode(self.mode)
            .with_format(self.format)
            .with_latency(self.latency)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if cli.latency { "info" } else { "warn" };
        EnvFilter::new(level)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let processor = PriceQueryProcessor::new(cli.config());
    let stdout = io::stdout();
    processor
        .run(io::stdin().lock(), BufWriter::new(stdout.lock()))
        .context("price query run failed")?;

    Ok(())
}
