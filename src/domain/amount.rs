//! Numeric coercion for caller-supplied amounts.

use serde::{de::IgnoredAny, Deserialize, Deserializer};

/// Collapses non-finite values to zero so a bad field never poisons the balance.
pub fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerces a percentage lever and converts it into a fraction.
pub fn percent(value: f64) -> f64 {
    coerce(value) / 100.0
}

/// Serde adapter accepting a number, `null`, or a numeric string. Anything else reads as 0.
pub fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null,
        Other(IgnoredAny),
    }

    let parsed = match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(value)) => value,
        Some(Raw::Text(text)) => text.trim().parse::<f64>().unwrap_or(0.0),
        Some(Raw::Null) | Some(Raw::Other(_)) | None => 0.0,
    };
    Ok(coerce(parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "lenient")]
        value: f64,
    }

    fn parse(json: &str) -> f64 {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn coerce_replaces_non_finite_values() {
        assert_eq!(coerce(f64::NAN), 0.0);
        assert_eq!(coerce(f64::INFINITY), 0.0);
        assert_eq!(coerce(-12.5), -12.5);
    }

    #[test]
    fn lenient_accepts_null_missing_and_text() {
        assert_eq!(parse(r#"{"value": 42.5}"#), 42.5);
        assert_eq!(parse(r#"{"value": null}"#), 0.0);
        assert_eq!(parse(r#"{}"#), 0.0);
        assert_eq!(parse(r#"{"value": " 300 "}"#), 300.0);
        assert_eq!(parse(r#"{"value": "abc"}"#), 0.0);
        assert_eq!(parse(r#"{"value": true}"#), 0.0);
    }
}
