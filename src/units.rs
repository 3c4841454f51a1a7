//! Unit kinds, their millisecond factors, and the alias table used by the parser.

use serde::{Deserialize, Serialize};

pub const SECOND: f64 = 1000.0;
pub const MINUTE: f64 = SECOND * 60.0;
pub const HOUR: f64 = MINUTE * 60.0;
pub const DAY: f64 = HOUR * 24.0;
pub const WEEK: f64 = DAY * 7.0;
/// Mean Gregorian year. Not calendar exact.
pub const YEAR: f64 = DAY * 365.242199;

/// One of the seven unit kinds a duration string can name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Year,
}

/// Units the formatter picks from, largest first.
pub const FORMAT_UNITS: [Unit; 4] = [Unit::Day, Unit::Hour, Unit::Minute, Unit::Second];

// Keys are lowercase; callers normalize before lookup.
static UNIT_ALIASES: phf::Map<&'static str, Unit> = phf::phf_map! {
    "ms" => Unit::Millisecond,
    "msec" => Unit::Millisecond,
    "msecs" => Unit::Millisecond,
    "millisecond" => Unit::Millisecond,
    "milliseconds" => Unit::Millisecond,
    "s" => Unit::Second,
    "sec" => Unit::Second,
    "secs" => Unit::Second,
    "second" => Unit::Second,
    "seconds" => Unit::Second,
    "m" => Unit::Minute,
    "min" => Unit::Minute,
    "mins" => Unit::Minute,
    "minute" => Unit::Minute,
    "minutes" => Unit::Minute,
    "h" => Unit::Hour,
    "hr" => Unit::Hour,
    "hrs" => Unit::Hour,
    "hour" => Unit::Hour,
    "hours" => Unit::Hour,
    "d" => Unit::Day,
    "day" => Unit::Day,
    "days" => Unit::Day,
    "w" => Unit::Week,
    "week" => Unit::Week,
    "weeks" => Unit::Week,
    "y" => Unit::Year,
    "yr" => Unit::Year,
    "yrs" => Unit::Year,
    "year" => Unit::Year,
    "years" => Unit::Year,
};

impl Unit {
    /// Resolve a unit token (e.g. `"Hrs"`, `"ms"`) to its kind.
    /// The lookup is case-insensitive; unknown tokens yield `None`.
    #[inline]
    pub fn from_token(token: &str) -> Option<Unit> {
        let normalized = token.to_lowercase();
        UNIT_ALIASES.get(normalized.as_str()).copied()
    }

    /// Milliseconds in one of this unit.
    #[inline]
    pub const fn factor(self) -> f64 {
        match self {
            Unit::Millisecond => 1.0,
            Unit::Second => SECOND,
            Unit::Minute => MINUTE,
            Unit::Hour => HOUR,
            Unit::Day => DAY,
            Unit::Week => WEEK,
            Unit::Year => YEAR,
        }
    }

    /// Suffix used by the short format (`"3h"`).
    #[inline]
    pub const fn short_suffix(self) -> &'static str {
        match self {
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Year => "y",
        }
    }

    /// Singular name used by the long format (`"3 hours"`).
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Millisecond => "millisecond",
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Year => "year",
        }
    }

    /// Every alias that resolves to this unit.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        UNIT_ALIASES
            .entries()
            .filter_map(move |(alias, unit)| if *unit == self { Some(*alias) } else { None })
    }

    /// Largest formatting unit whose factor fits into `ms_abs`, if any.
    #[inline]
    pub fn largest_fitting(ms_abs: f64) -> Option<Unit> {
        FORMAT_UNITS.into_iter().find(|unit| ms_abs >= unit.factor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_chain() {
        assert_eq!(Unit::Second.factor(), 1_000.0);
        assert_eq!(Unit::Minute.factor(), 60_000.0);
        assert_eq!(Unit::Hour.factor(), 3_600_000.0);
        assert_eq!(Unit::Day.factor(), 86_400_000.0);
        assert_eq!(Unit::Week.factor(), 604_800_000.0);
        assert_eq!(Unit::Year.factor(), 86_400_000.0 * 365.242199);
    }

    #[test]
    fn tokens_resolve_case_insensitively() {
        assert_eq!(Unit::from_token("MS"), Some(Unit::Millisecond));
        assert_eq!(Unit::from_token("Hrs"), Some(Unit::Hour));
        assert_eq!(Unit::from_token("YEARS"), Some(Unit::Year));
        assert_eq!(Unit::from_token("fortnight"), None);
        assert_eq!(Unit::from_token(""), None);
    }

    #[test]
    fn alias_counts() {
        assert_eq!(Unit::Millisecond.aliases().count(), 5);
        assert_eq!(Unit::Second.aliases().count(), 5);
        assert_eq!(Unit::Minute.aliases().count(), 5);
        assert_eq!(Unit::Hour.aliases().count(), 5);
        assert_eq!(Unit::Day.aliases().count(), 3);
        assert_eq!(Unit::Week.aliases().count(), 3);
        assert_eq!(Unit::Year.aliases().count(), 5);
    }

    #[test]
    fn largest_fitting_unit() {
        assert_eq!(Unit::largest_fitting(0.0), None);
        assert_eq!(Unit::largest_fitting(999.0), None);
        assert_eq!(Unit::largest_fitting(1_000.0), Some(Unit::Second));
        assert_eq!(Unit::largest_fitting(59_999.0), Some(Unit::Second));
        assert_eq!(Unit::largest_fitting(60_000.0), Some(Unit::Minute));
        assert_eq!(Unit::largest_fitting(3_600_000.0), Some(Unit::Hour));
        // Weeks and years are parse-only.
        assert_eq!(Unit::largest_fitting(YEAR * 10.0), Some(Unit::Day));
    }

    #[test]
    fn serializes_round_trip() {
        let text = serde_json::to_string(&Unit::Millisecond).unwrap();
        assert_eq!(text, r#""millisecond""#);
        let back: Unit = serde_json::from_str(r#""week""#).unwrap();
        assert_eq!(back, Unit::Week);
        assert!(serde_json::from_str::<Unit>(r#""fortnight""#).is_err());
    }
}
