//! Contains code shared between this module's submodules

use crate::configs::TIME_UNIT_STR;
use std::{
    hint::black_box,
    time::{Duration, Instant},
};


/// Runs the given synchronous `algorithm` callback function or closure once,
/// measuring (and returning) the wall-clock time it took to run it.\
/// The `algorithm`'s result is passed through [black_box] to avoid compiler call cancellation optimizations.
/// returns: tuple with (elapsed: [Duration], algorithm_result: `R`)
pub fn run_sync_pass<R>(algorithm: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let r = black_box(algorithm());
    let duration = start.elapsed();
    (duration, r)
}

/// Presents `elapsed` as a single number of microseconds, with 3 decimal places, followed by the unit
pub fn fmt_elapsed(elapsed: Duration) -> String {
    format!("{:.3}{}", elapsed.as_nanos() as f64 / 1000.0, TIME_UNIT_STR)
}
