//! Common helper functions for tests and benchmarks.
use ms_duration::units::{DAY, HOUR, MINUTE, SECOND};
use ms_duration::Unit;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

// --- Constants ---
pub const MS_PER_SECOND: f64 = SECOND;
pub const MS_PER_MINUTE: f64 = MINUTE;
pub const MS_PER_HOUR: f64 = HOUR;
pub const MS_PER_DAY: f64 = DAY;

/// Relative tolerance for comparing parsed values against expected products.
pub const REL_TOLERANCE: f64 = 1e-9;

/// Every unit kind, for tests that sweep the alias table.
pub const ALL_UNITS: [Unit; 7] = [
    Unit::Millisecond,
    Unit::Second,
    Unit::Minute,
    Unit::Hour,
    Unit::Day,
    Unit::Week,
    Unit::Year,
];

// --- Tracing ---

static TRACING: Once = Once::new();

/// Installs a test-writer `fmt` subscriber once per process.
/// Filter comes from `RUST_LOG`, defaulting to `ms_duration=warn`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("ms_duration=warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

// --- Comparison Helpers ---

/// True when `actual` is within a relative `REL_TOLERANCE` of `expected`.
pub fn approx_eq(actual: f64, expected: f64) -> bool {
    if actual == expected {
        return true;
    }
    let scale = actual.abs().max(expected.abs()).max(1.0);
    (actual - expected).abs() <= scale * REL_TOLERANCE
}

/// Renders a number the way the duration grammar accepts it (no exponent).
pub fn literal(n: f64) -> String {
    let s = format!("{n}");
    debug_assert!(!s.contains('e'));
    s
}

/// Largest short-format unit for `ms`, or `Unit::Millisecond` below one second.
pub fn expected_unit(ms: f64) -> Unit {
    Unit::largest_fitting(ms.abs()).unwrap_or(Unit::Millisecond)
}
