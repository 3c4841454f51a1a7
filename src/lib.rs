//! Convert between human-readable durations and milliseconds.
//!
//! ```
//! use ms_duration::{convert, Options, Output};
//!
//! assert_eq!(convert("2 days", &Options::default()), Ok(Output::Millis(Some(172_800_000.0))));
//! assert_eq!(convert(60_000.0, &Options::long()), Ok(Output::Text("1 minute".into())));
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod format;
pub mod parse;
pub mod units;
pub mod util;

// Flat re-exports for the common entry points.
pub use config::Options;
pub use convert::{convert, convert_json, Input, Output};
pub use error::ConvertError;
pub use format::{format, format_long, format_short};
pub use parse::parse;
pub use units::Unit;
