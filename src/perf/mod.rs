mod clock;
pub mod latency;

pub use clock::{calibrate_ticks_per_ns, ticks};
pub use latency::{LatencyRecorder, LatencySummary};
