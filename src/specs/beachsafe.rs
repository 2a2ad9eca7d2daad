// src/specs/beachsafe.rs
//! Scraping rules for the beachsafe beach API.
//!
//! - Lookup key: the final path segment of the conditions link from the EPA row.
//! - Response shape: `{ "beach": { "weather": { "water_temperatures": <number|string> } } }`.
//!   Everything else in the payload is ignored.

use std::error::Error;

use serde::Deserialize;
use serde_json::Value;

use crate::core::sanitize::last_path_segment;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    beach: Option<Beach>,
}

#[derive(Debug, Deserialize)]
struct Beach {
    weather: Option<Weather>,
}

#[derive(Debug, Deserialize)]
struct Weather {
    water_temperatures: Option<Value>,
}

/// `https://beachsafe.org.au/beach/vic/bayside/hampton/some-beach` → `some-beach`
pub fn lookup_slug(conditions_url: &str) -> Option<&str> {
    last_path_segment(conditions_url)
}

/// Pull the water temperature out of an API body.
/// `Ok(None)` when the field is absent or not a usable scalar; `Err` only for non-JSON.
pub fn parse_water_temperature(body: &str) -> Result<Option<String>, Box<dyn Error>> {
    let resp: ApiResponse = serde_json::from_str(body)?;
    let value = resp
        .beach
        .and_then(|b| b.weather)
        .and_then(|w| w.water_temperatures);

    Ok(match value {
        Some(Value::Number(n)) => Some(format_number(&n)),
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(other) => {
            logd!("Beachsafe: ignoring water_temperatures of shape {}", other);
            None
        }
        None => None,
    })
}

/// Whole-valued floats print without a trailing `.0` (`18.0` → `18`).
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_final_segment() {
        assert_eq!(lookup_slug("https://beachsafe.org.au/beach/vic/x/some-beach"), Some("some-beach"));
    }

    #[test]
    fn number_and_string_temperatures() {
        let n = r#"{"beach":{"name":"Hampton","weather":{"water_temperatures":18.5,"wind":3}}}"#;
        assert_eq!(parse_water_temperature(n).unwrap().as_deref(), Some("18.5"));

        let whole = r#"{"beach":{"weather":{"water_temperatures":18.0}}}"#;
        assert_eq!(parse_water_temperature(whole).unwrap().as_deref(), Some("18"));

        let zero = r#"{"beach":{"weather":{"water_temperatures":0}}}"#;
        assert_eq!(parse_water_temperature(zero).unwrap().as_deref(), Some("0"));

        let s = r#"{"beach":{"weather":{"water_temperatures":" 17 "}}}"#;
        assert_eq!(parse_water_temperature(s).unwrap().as_deref(), Some("17"));
    }

    #[test]
    fn missing_or_odd_shapes_are_none() {
        assert_eq!(parse_water_temperature(r#"{"beach":{"weather":{}}}"#).unwrap(), None);
        assert_eq!(parse_water_temperature(r#"{"beach":null}"#).unwrap(), None);
        assert_eq!(parse_water_temperature(r#"{}"#).unwrap(), None);
        assert_eq!(parse_water_temperature(r#"{"beach":{"weather":{"water_temperatures":null}}}"#).unwrap(), None);
        assert_eq!(parse_water_temperature(r#"{"beach":{"weather":{"water_temperatures":[1,2]}}}"#).unwrap(), None);
    }

    #[test]
    fn non_json_is_an_error() {
        assert!(parse_water_temperature("<html>rate limited</html>").is_err());
    }
}
