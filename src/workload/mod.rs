use crate::input::Batch;
use crate::types::price::Price;
use crate::types::query::Query;
use rand::SeedableRng;
use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::{Zipf, ZipfError};

/// How hit queries pick which listed price to ask for
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum QueryMix {
    /// Every listed price equally likely
    Uniform,
    /// The k-th price (ascending) is asked about with weight 1/k^exponent
    Zipfian { exponent: f64 },
}

/// Shape of a synthetic batch.
///
/// Listed prices are always even and misses always odd, so a miss never has
/// an exact match even when it falls inside the price range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorkloadSpec {
    pub prices: usize,
    pub queries: usize,
    /// Listed prices fall in [0, 2 * price_levels)
    pub price_levels: i32,
    /// Fraction of queries that ask for a listed price
    pub hit_ratio: f64,
    /// Fraction of misses that lie above the maximum price
    pub above_max_ratio: f64,
    pub mix: QueryMix,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            prices: 10_000,
            queries: 10_000,
            price_levels: 50_000,
            hit_ratio: 0.5,
            above_max_ratio: 0.2,
            mix: QueryMix::Uniform,
        }
    }
}

/// Generate a reproducible batch from `seed`
pub fn generate(spec: &WorkloadSpec, seed: u64) -> Result<Batch, ZipfError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let levels = spec.price_levels.clamp(1, i32::MAX / 4);

    let prices: Vec<Price> = (0..spec.prices)
        .map(|_| Price::define(rng.random_range(0..levels) * 2))
        .collect();

    let mut ranked = prices.clone();
    ranked.sort_unstable();

    let zipf = match spec.mix {
        QueryMix::Zipfian { exponent } if !ranked.is_empty() => {
            Some(Zipf::new(ranked.len() as f64, exponent)?)
        }
        _ => None,
    };

    let hit_ratio = spec.hit_ratio.clamp(0.0, 1.0);
    let above_max_ratio = spec.above_max_ratio.clamp(0.0, 1.0);
    let max = ranked.last().map_or(0, Price::value);

    let queries = (0..spec.queries)
        .map(|_| {
            let value = if !ranked.is_empty() && rng.random_bool(hit_ratio) {
                let idx = match &zipf {
                    Some(zipf) => (zipf.sample(&mut rng) as usize - 1).min(ranked.len() - 1),
                    None => rng.random_range(0..ranked.len()),
                };
                ranked[idx].value()
            } else if rng.random_bool(above_max_ratio) {
                max + rng.random_range(0..500) * 2 + 1
            } else {
                rng.random_range(0..levels) * 2 + 1
            };
            Query::define(value)
        })
        .collect();

    Ok(Batch { prices, queries })
}

/// Render a batch in the stdin format the processor reads
pub fn render(batch: &Batch) -> String {
    let prices: Vec<String> = batch.prices.iter().map(Price::to_string).collect();
    let mut text = format!(
        "{}\n{}\n{}\n",
        batch.prices.len(),
        prices.join(" "),
        batch.queries.len()
    );
    for query in &batch.queries {
        text.push_str(&query.value().to_string());
        text.push('\n');
    }
    text
}
