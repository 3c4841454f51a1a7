use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Formatting options. Only `long` is recognized; unknown fields are ignored
/// when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Verbose output (`"3 hours"`) instead of the short form (`"3h"`).
    pub long: bool,
}

impl Options {
    pub const fn short() -> Self {
        Self { long: false }
    }

    pub const fn long() -> Self {
        Self { long: true }
    }

    /// Reads options from a JSON value. `null`, non-objects and objects that
    /// fail to deserialize all fall back to the defaults.
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(_) => Options::deserialize(value).unwrap_or_default(),
            _ => Options::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_short() {
        assert_eq!(Options::default(), Options::short());
        assert_eq!(Options::from_json(&json!({})), Options::short());
        assert_eq!(Options::from_json(&Value::Null), Options::short());
    }

    #[test]
    fn reads_long_flag() {
        assert_eq!(Options::from_json(&json!({ "long": true })), Options::long());
        assert_eq!(Options::from_json(&json!({ "long": false })), Options::short());
    }

    #[test]
    fn ignores_unknown_fields() {
        let opts = Options::from_json(&json!({ "long": true, "locale": "de" }));
        assert_eq!(opts, Options::long());
    }

    #[test]
    fn non_object_falls_back() {
        assert_eq!(Options::from_json(&json!(true)), Options::short());
        assert_eq!(Options::from_json(&json!([1, 2])), Options::short());
        assert_eq!(Options::from_json(&json!({ "long": "yes" })), Options::short());
    }

    #[test]
    fn non_boolean_long_is_not_truthy() {
        assert_eq!(Options::from_json(&json!({ "long": 1 })), Options::short());
        assert_eq!(Options::from_json(&json!({ "long": null })), Options::short());
    }

    #[test]
    fn serializes_round_trip() {
        let text = serde_json::to_string(&Options::long()).unwrap();
        assert_eq!(text, r#"{"long":true}"#);
    }
}
