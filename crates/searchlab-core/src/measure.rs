//! Wall-clock measurement around a single synchronous call

use std::time::{Duration, Instant};

/// Run `f` to completion, returning its result and the elapsed wall time.
///
/// The timestamps come from the monotonic clock; the wrapped return value
/// passes through unchanged. There is no timeout, so a hang in `f` hangs
/// the caller.
pub fn measure<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
