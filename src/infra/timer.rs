// ============================================================
// Layer 6 — Operation Timer
// ============================================================
// Wraps a closure, runs it, and logs how long it took.
//
//   let data = timed("load_data", || read_everything())?;
//   → Function 'load_data' took 0.42s to complete.
//
// The closure's return value is passed through untouched, so
// a Result keeps flowing into the caller's `?`.

use std::time::{Duration, Instant};

/// Run `f`, log the elapsed wall-clock time under `name`, return `f`'s result.
pub fn timed<T>(name: &str, f: impl FnOnce() -> T) -> T {
    timed_with_elapsed(name, f).0
}

/// Like [`timed`], but also hands back the measured duration.
pub fn timed_with_elapsed<T>(name: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start   = Instant::now();
    let result  = f();
    let elapsed = start.elapsed();
    tracing::info!(
        "Function '{}' took {:.2}s to complete.",
        name,
        elapsed.as_secs_f64()
    );
    (result, elapsed)
}
