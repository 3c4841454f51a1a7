//! Millisecond formatting, short (`"3h"`) and long (`"3 hours"`).

use crate::config::Options;
use crate::error::ConvertError;
use crate::units::Unit;
use tracing::trace;

/// Formats a finite millisecond count, honoring `options.long`.
///
/// Non-finite input is rejected with [`ConvertError::InvalidInput`].
pub fn format(ms: f64, options: &Options) -> Result<String, ConvertError> {
    if !ms.is_finite() {
        return Err(ConvertError::invalid(&ms));
    }
    Ok(if options.long {
        format_long(ms)
    } else {
        format_short(ms)
    })
}

/// Short format: the largest fitting unit, rounded, with a one-letter suffix.
/// Below one second the raw value is kept and suffixed with `ms`.
pub fn format_short(ms: f64) -> String {
    let out = match Unit::largest_fitting(ms.abs()) {
        Some(unit) => format!("{}{}", render(round(ms / unit.factor())), unit.short_suffix()),
        None => format!("{}ms", render(ms)),
    };
    trace!(ms, %out, "formatted duration (short)");
    out
}

/// Long format: `"<n> <unit>"`, pluralized once `|ms|` reaches 1.5 units.
/// Below one second the raw value is kept and suffixed with `" ms"`.
pub fn format_long(ms: f64) -> String {
    let ms_abs = ms.abs();
    let out = match Unit::largest_fitting(ms_abs) {
        Some(unit) => {
            let factor = unit.factor();
            let plural = if ms_abs >= factor * 1.5 { "s" } else { "" };
            format!("{} {}{plural}", render(round(ms / factor)), unit.name())
        }
        None => format!("{} ms", render(ms)),
    };
    trace!(ms, %out, "formatted duration (long)");
    out
}

// Half away from zero.
#[inline]
fn round(x: f64) -> f64 {
    x.round()
}

/// Renders a number without a trailing `.0` and with `-0` collapsed to `0`.
#[inline]
pub(crate) fn render(n: f64) -> String {
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}
