//! Deserializers for numeric columns the backend sometimes sends as strings.
//!
//! Use with `#[serde(default, deserialize_with = "...")]`; `null`, missing and
//! unparsable values all become zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn f64_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

pub fn u64_or_zero<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let s = s.trim();
            s.parse::<u64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| *f >= 0.0).map(|f| f as u64))
                .unwrap_or(0)
        }
        _ => 0,
    })
}

pub fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Ids are usually UUID strings, but integer keys are accepted too.
pub fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match raw {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(default, deserialize_with = "f64_or_zero")]
        earnings: f64,
        #[serde(default, deserialize_with = "u64_or_zero")]
        tasks: u64,
        #[serde(default, deserialize_with = "opt_f64")]
        rating: Option<f64>,
        #[serde(deserialize_with = "id_string")]
        id: String,
    }

    #[test]
    fn test_numbers_and_strings() {
        let row: Row = serde_json::from_value(json!({
            "earnings": "1250.50",
            "tasks": "7",
            "rating": 4.5,
            "id": 42
        }))
        .unwrap();
        assert_eq!(row.earnings, 1250.5);
        assert_eq!(row.tasks, 7);
        assert_eq!(row.rating, Some(4.5));
        assert_eq!(row.id, "42");
    }

    #[test]
    fn test_missing_null_and_garbage_become_zero() {
        let row: Row = serde_json::from_value(json!({
            "earnings": null,
            "tasks": "n/a",
            "id": "abc"
        }))
        .unwrap();
        assert_eq!(row.earnings, 0.0);
        assert_eq!(row.tasks, 0);
        assert_eq!(row.rating, None);
    }

    #[test]
    fn test_negative_count_is_zero() {
        let row: Row = serde_json::from_value(json!({ "tasks": -3, "id": "x" })).unwrap();
        assert_eq!(row.tasks, 0);
    }
}
