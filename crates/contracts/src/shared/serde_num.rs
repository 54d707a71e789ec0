//! Lenient numeric fields
//!
//! Decimal columns come back either as JSON numbers or as strings
//! (`"500.00"`), depending on the serializer on the other side.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

/// Deserialize an `f64` from a JSON number or a numeric string
pub fn f64_lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| de::Error::custom(format!("invalid number: {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "f64_lenient")]
        value: f64,
    }

    fn parse(json: &str) -> Result<f64, serde_json::Error> {
        serde_json::from_str::<Holder>(json).map(|h| h.value)
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        assert_eq!(parse(r#"{"value": 500}"#).unwrap(), 500.0);
        assert_eq!(parse(r#"{"value": -2.5}"#).unwrap(), -2.5);
        assert_eq!(parse(r#"{"value": "500.00"}"#).unwrap(), 500.0);
        assert_eq!(parse(r#"{"value": " -10 "}"#).unwrap(), -10.0);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(parse(r#"{"value": "abc"}"#).is_err());
        assert!(parse(r#"{"value": "NaN"}"#).is_err());
        assert!(parse(r#"{"value": null}"#).is_err());
    }
}
