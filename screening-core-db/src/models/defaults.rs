use serde::{Deserialize, Deserializer};

/// Country shown for records that omit one
pub const DEFAULT_COUNTRY: &str = "Unknown";

/// Risk level assumed for records that omit one
pub const DEFAULT_RISK_LEVEL: u8 = 50;

/// Clamps a remote risk score into `0..=100`, defaulting missing values.
pub fn normalize_risk_level(raw: Option<f64>) -> u8 {
    match raw {
        Some(value) if value.is_finite() => value.round().clamp(0.0, 100.0) as u8,
        _ => DEFAULT_RISK_LEVEL,
    }
}

/// Trims a free-text field, falling back to `default` when blank.
pub fn text_or(raw: Option<String>, default: &str) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => default.to_string(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

/// Accepts numeric ids sent either as JSON numbers or numeric strings.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("Invalid id: {text}"))),
    }
}
