//! Interop with `std::time::Duration`.

use crate::parse::parse;
use std::time::Duration;

/// Converts a millisecond count into a `Duration`.
/// Negative and non-finite values have no `Duration` form and yield `None`.
#[inline]
pub fn to_std_duration(ms: f64) -> Option<Duration> {
    if !ms.is_finite() || ms < 0.0 || ms >= u64::MAX as f64 {
        return None;
    }
    let whole = ms.trunc();
    let nanos = ((ms - whole) * 1_000_000.0).round() as u64;
    Some(Duration::from_millis(whole as u64) + Duration::from_nanos(nanos))
}

/// Parses a duration string straight into a `Duration`, e.g. for timeouts.
#[inline]
pub fn parse_std(input: &str) -> Option<Duration> {
    parse(input).and_then(to_std_duration)
}

/// Exact multi-unit rendering using `humantime` (`"1h 30m"`), for when the
/// rounded single-unit form loses too much.
#[inline]
pub fn format_precise(ms: f64) -> Option<String> {
    to_std_duration(ms).map(|d| humantime::format_duration(d).to_string())
}
