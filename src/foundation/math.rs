use std::time::Duration;

/// Progress of `elapsed` through `total` as a fraction.
///
/// A zero `total` yields `0.0` so degenerate movements report their start value.
pub(crate) fn ratio(elapsed: Duration, total: Duration) -> f64 {
    if total.is_zero() {
        return 0.0;
    }
    elapsed.as_nanos() as f64 / total.as_nanos() as f64
}

/// Time past `total`, or zero when `elapsed` has not reached it.
pub(crate) fn overrun(elapsed: Duration, total: Duration) -> Duration {
    elapsed.saturating_sub(total)
}
