//! The single conversion entry point: strings are parsed, numbers are formatted.

use crate::config::Options;
use crate::error::ConvertError;
use crate::format::{format_long, format_short};
use crate::parse::parse;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// A value to convert: duration text to parse, or milliseconds to format.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Input<'a> {
    Text(&'a str),
    Millis(f64),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s.as_str())
    }
}

impl From<f64> for Input<'_> {
    fn from(ms: f64) -> Self {
        Input::Millis(ms)
    }
}

impl From<i64> for Input<'_> {
    fn from(ms: i64) -> Self {
        Input::Millis(ms as f64)
    }
}

impl From<u64> for Input<'_> {
    fn from(ms: u64) -> Self {
        Input::Millis(ms as f64)
    }
}

impl From<Duration> for Input<'_> {
    fn from(d: Duration) -> Self {
        Input::Millis(d.as_secs_f64() * 1_000.0)
    }
}

/// Result of a successful [`convert`] call.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Parsed milliseconds; `None` when the text was not a duration.
    Millis(Option<f64>),
    /// Formatted duration text.
    Text(String),
}

impl Output {
    /// Milliseconds, if this came from a successful parse.
    pub fn as_millis(&self) -> Option<f64> {
        match self {
            Output::Millis(ms) => *ms,
            Output::Text(_) => None,
        }
    }

    /// Formatted text, if this came from formatting a number.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Output::Text(s) => Some(s),
            Output::Millis(_) => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Output::Text(s) => Some(s),
            Output::Millis(_) => None,
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Millis(Some(ms)) => f.write_str(&crate::format::render(*ms)),
            Output::Millis(None) => f.write_str("undefined"),
            Output::Text(s) => f.write_str(s),
        }
    }
}

/// Parses `val` if it is text, formats it if it is a number.
///
/// Empty text and non-finite numbers are rejected with
/// [`ConvertError::InvalidInput`]. Text that is not a duration is not an
/// error: it yields `Output::Millis(None)`.
pub fn convert<'a>(val: impl Into<Input<'a>>, options: &Options) -> Result<Output, ConvertError> {
    match val.into() {
        Input::Text(s) if !s.is_empty() => Ok(Output::Millis(parse(s))),
        Input::Millis(ms) if ms.is_finite() => Ok(Output::Text(if options.long {
            format_long(ms)
        } else {
            format_short(ms)
        })),
        other => {
            let err = ConvertError::invalid(&other);
            debug!(error = %err, "rejected conversion input");
            Err(err)
        }
    }
}

/// Dynamic variant of [`convert`] for values that arrive as JSON, e.g. from a
/// configuration file. Strings parse, numbers format, everything else is
/// `InvalidInput`. `options` follows [`Options::from_json`].
pub fn convert_json(val: &Value, options: Option<&Value>) -> Result<Output, ConvertError> {
    let options = options.map(Options::from_json).unwrap_or_default();
    match val {
        Value::String(s) => convert(s, &options),
        // Every JSON number has an f64 view, possibly lossy for huge integers.
        Value::Number(n) => match n.as_f64() {
            Some(ms) => convert(ms, &options),
            None => Err(ConvertError::invalid(val)),
        },
        other => {
            let err = ConvertError::invalid(other);
            debug!(error = %err, "rejected conversion input");
            Err(err)
        }
    }
}
