use serde::Serialize;
use thiserror::Error;

/// Errors raised by the conversion entry points.
///
/// Strings that fail to parse are not errors; they come back as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// The value was neither a non-empty string nor a finite number.
    #[error("val is not a non-empty string or a valid number. val={value}")]
    InvalidInput { value: String },
}

impl ConvertError {
    /// Builds an `InvalidInput` carrying the JSON rendering of `val`
    /// (`serde_json` writes non-finite floats as `null`).
    pub(crate) fn invalid<T: Serialize + ?Sized>(val: &T) -> Self {
        let value = serde_json::to_string(val).unwrap_or_else(|_| "undefined".to_string());
        ConvertError::InvalidInput { value }
    }
}
