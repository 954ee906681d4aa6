use super::ticks;
use serde::Serialize;

/// Collects raw cycle counts for individual operations
pub struct LatencyRecorder {
    samples: Vec<u64>,
}

/// Percentiles in nanoseconds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencySummary {
    pub samples: usize,
    pub min_ns: f64,
    pub max_ns: f64,
    pub mean_ns: f64,
    pub p50_ns: f64,
    pub p95_ns: f64,
    pub p99_ns: f64,
    pub p999_ns: f64,
}

impl LatencyRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub fn record<F, R>(&mut self, op: F) -> R
    where
        F: FnOnce() -> R,
    {
        let start = ticks();
        let result = op();
        let end = ticks();

        self.samples.push(end.saturating_sub(start));

        result
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Sorts the samples in place. `None` when nothing was recorded.
    pub fn summary(&mut self, ticks_per_ns: f64) -> Option<LatencySummary> {
        if self.samples.is_empty() {
            return None;
        }

        self.samples.sort_unstable();

        let to_ns = |ticks: u64| ticks as f64 / ticks_per_ns;
        let len = self.samples.len();
        let sum: u64 = self.samples.iter().sum();

        Some(LatencySummary {
            samples: len,
            min_ns: to_ns(self.samples[0]),
            max_ns: to_ns(self.samples[len - 1]),
            mean_ns: sum as f64 / len as f64 / ticks_per_ns,
            p50_ns: to_ns(self.percentile_at(0.50)),
            p95_ns: to_ns(self.percentile_at(0.95)),
            p99_ns: to_ns(self.percentile_at(0.99)),
            p999_ns: to_ns(self.percentile_at(0.999)),
        })
    }

    // samples must be sorted and non-empty
    fn percentile_at(&self, p: f64) -> u64 {
        let index = (p * (self.samples.len() - 1) as f64) as usize;
        self.samples[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_passes_result_through() {
        let mut recorder = LatencyRecorder::new(4);

        let result = recorder.record(|| (0..10).sum::<i32>());

        assert_eq!(result, 45);
        assert_eq!(recorder.len(), 1);
        assert!(!recorder.is_empty());
    }

    #[test]
    fn test_summary_is_ordered() {
        let mut recorder = LatencyRecorder::new(500);
        for i in 0..500u64 {
            recorder.record(|| {
                let mut acc = 0u64;
                for j in 0..i {
                    acc = acc.wrapping_add(j);
                }
                std::hint::black_box(acc)
            });
        }

        let stats = recorder.summary(1.0).expect("samples recorded");

        assert_eq!(stats.samples, 500);
        assert!(stats.min_ns <= stats.p50_ns);
        assert!(stats.p50_ns <= stats.p95_ns);
        assert!(stats.p95_ns <= stats.p99_ns);
        assert!(stats.p99_ns <= stats.p999_ns);
        assert!(stats.p999_ns <= stats.max_ns);
    }

    #[test]
    fn test_summary_scales_by_cycle_rate() {
        let mut recorder = LatencyRecorder {
            samples: vec![40, 10, 20, 30],
        };

        let stats = recorder.summary(2.0).expect("samples recorded");

        assert_eq!(stats.min_ns, 5.0);
        assert_eq!(stats.max_ns, 20.0);
        assert_eq!(stats.mean_ns, 12.5);
        assert_eq!(stats.p50_ns, 10.0);
    }

    #[test]
    fn test_empty_recorder() {
        let mut recorder = LatencyRecorder::new(10);
        assert!(recorder.summary(1.0).is_none());
        assert!(recorder.is_empty());
    }
}
