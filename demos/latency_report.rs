/// Per-query latency report for both search modes
///
/// Generates a seeded workload, answers every query once per mode and prints
/// latency percentiles side by side.
///
/// Run with: cargo run --release --example latency_report
use price_query::perf::{LatencyRecorder, LatencySummary, calibrate_ticks_per_ns};
use price_query::types::query::Query;
use price_query::workload::{self, QueryMix, WorkloadSpec};
use price_query::{PriceList, SearchMode};

const SEED: u64 = 42;
const NUM_PRICES: usize = 100_000;
const NUM_QUERIES: usize = 100_000;

fn main() {
    println!("=== Price Query Latency Report ===\n");

    let ticks_per_ns = calibrate_ticks_per_ns();
    println!("Counter rate: {:.3} ticks/ns\n", ticks_per_ns);

    for (label, mix) in [
        ("Uniform", QueryMix::Uniform),
        ("Zipfian (s=1.0)", QueryMix::Zipfian { exponent: 1.0 }),
    ] {
        let spec = WorkloadSpec {
            prices: NUM_PRICES,
            queries: NUM_QUERIES,
            mix,
            ..WorkloadSpec::default()
        };
        let batch = workload::generate(&spec, SEED).expect("valid workload");
        let list = PriceList::build(batch.prices).expect("non-empty workload");

        println!("--- {} queries, {} prices ---", label, list.len());
        let exact = measure(&list, &batch.queries, SearchMode::Exact, ticks_per_ns);
        let converged = measure(&list, &batch.queries, SearchMode::Converged, ticks_per_ns);
        print_comparison(&exact, &converged);
        println!();
    }
}

fn measure(
    list: &PriceList,
    queries: &[Query],
    mode: SearchMode,
    ticks_per_ns: f64,
) -> LatencySummary {
    let mut recorder = LatencyRecorder::new(queries.len());
    for &query in queries {
        std::hint::black_box(recorder.record(|| list.query(query, mode)));
    }
    recorder.summary(ticks_per_ns).expect("queries recorded")
}

fn print_comparison(exact: &LatencySummary, converged: &LatencySummary) {
    println!("{:-<46}", "");
    println!("{:<10} | {:>14} | {:>14}", "Stat", "exact", "converged");
    println!("{:-<46}", "");
    let rows = [
        ("min", exact.min_ns, converged.min_ns),
        ("p50", exact.p50_ns, converged.p50_ns),
        ("mean", exact.mean_ns, converged.mean_ns),
        ("p95", exact.p95_ns, converged.p95_ns),
        ("p99", exact.p99_ns, converged.p99_ns),
        ("p99.9", exact.p999_ns, converged.p999_ns),
        ("max", exact.max_ns, converged.max_ns),
    ];
    for (name, a, b) in rows {
        println!("{:<10} | {:>11.1} ns | {:>11.1} ns", name, a, b);
    }
    println!("{:-<46}", "");
}
