use std::time::{Duration, Instant};

/// Raw tick source for timing single queries. The TSC on x86_64.
#[cfg(target_arch = "x86_64")]
#[inline(always)]
pub fn ticks() -> u64 {
    // SAFETY: every x86_64 CPU implements RDTSC
    unsafe { std::arch::x86_64::_rdtsc() }
}

/// Raw tick source for timing single queries. Nanoseconds since the first
/// call on targets without a TSC.
#[cfg(not(target_arch = "x86_64"))]
#[inline(always)]
pub fn ticks() -> u64 {
    static EPOCH: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
    let elapsed = EPOCH.get_or_init(Instant::now).elapsed().as_nanos();
    u64::try_from(elapsed).unwrap_or(u64::MAX)
}

const CALIBRATION_WINDOW: Duration = Duration::from_millis(10);

/// Ticks per nanosecond, measured against the monotonic clock.
/// Falls back to 1.0 if the counter did not advance.
pub fn calibrate_ticks_per_ns() -> f64 {
    let wall_start = Instant::now();
    let tick_start = ticks();

    std::thread::sleep(CALIBRATION_WINDOW);

    let tick_delta = ticks().saturating_sub(tick_start) as f64;
    let wall_delta = wall_start.elapsed().as_nanos() as f64;

    if tick_delta > 0.0 && wall_delta > 0.0 {
        tick_delta / wall_delta
    } else {
        1.0
    }
}
