//! Duration string parsing (`"1.5h"` -> `5_400_000.0`).

use crate::units::Unit;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Inputs longer than this (in characters) are rejected without matching.
pub const MAX_INPUT_LEN: usize = 100;

// Whole-string match: signed decimal literal, optional whitespace, optional unit token.
static DURATION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(-?(?:[0-9]+\.?[0-9]*|\.[0-9]+))\s*(milliseconds?|msecs?|ms|seconds?|secs?|s|minutes?|mins?|m|hours?|hrs?|h|days?|d|weeks?|w|years?|yrs?|y)?$",
    )
    .unwrap_or_else(|e| panic!("duration pattern failed to compile: {e}"))
});

/// Parses a duration string and returns its length in milliseconds.
///
/// Returns `None` when the string is longer than [`MAX_INPUT_LEN`], does not
/// match the duration grammar, or names a unit outside the alias table.
/// A unitless number is taken as milliseconds.
pub fn parse(input: &str) -> Option<f64> {
    if input.chars().count() > MAX_INPUT_LEN {
        debug!(len = input.len(), "duration string exceeds length limit");
        return None;
    }

    let Some(caps) = DURATION_PATTERN.captures(input) else {
        debug!(input, "duration string did not match");
        return None;
    };

    let n: f64 = caps.get(1)?.as_str().parse().ok()?;
    let token = caps.get(2).map_or("ms", |m| m.as_str());

    let Some(unit) = Unit::from_token(token) else {
        debug!(input, token, "unrecognized unit token");
        return None;
    };

    let ms = n * unit.factor();
    trace!(input, ?unit, ms, "parsed duration");
    Some(ms)
}
