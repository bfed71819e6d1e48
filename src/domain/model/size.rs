use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// Product dimensions. Every axis is always present; missing axes are 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    #[serde(
        rename = "X",
        default,
        serialize_with = "serialize_dimension",
        deserialize_with = "deserialize_dimension"
    )]
    pub x: f64,
    #[serde(
        rename = "Y",
        default,
        serialize_with = "serialize_dimension",
        deserialize_with = "deserialize_dimension"
    )]
    pub y: f64,
    #[serde(
        rename = "Z",
        default,
        serialize_with = "serialize_dimension",
        deserialize_with = "deserialize_dimension"
    )]
    pub z: f64,
}

impl Size {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

// Whole numbers go out as integers so stored records keep the shape the UI wrote.
fn serialize_dimension<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

// Form inputs may hand over numbers as strings; blanks and nulls count as 0.
fn deserialize_dimension<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match JsonValue::deserialize(deserializer)? {
        JsonValue::Null => Ok(0.0),
        JsonValue::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("dimension out of range")),
        JsonValue::String(s) if s.trim().is_empty() => Ok(0.0),
        JsonValue::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got {:?}", s))),
        other => Err(serde::de::Error::custom(format!(
            "expected a number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_axes_default_to_zero() {
        let size: Size = serde_json::from_value(json!({ "X": 40 })).unwrap();
        assert_eq!(size, Size::new(40.0, 0.0, 0.0));
    }

    #[test]
    fn accepts_numeric_strings_from_forms() {
        let size: Size = serde_json::from_value(json!({ "X": "120", "Y": " 75.5 ", "Z": "" })).unwrap();
        assert_eq!(size, Size::new(120.0, 75.5, 0.0));
    }

    #[test]
    fn whole_numbers_serialize_as_integers() {
        let value = serde_json::to_value(Size::new(40.0, 90.5, 0.0)).unwrap();
        assert_eq!(value, json!({ "X": 40, "Y": 90.5, "Z": 0 }));
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_value::<Size>(json!({ "X": "wide" })).is_err());
        assert!(serde_json::from_value::<Size>(json!({ "X": [1] })).is_err());
    }
}
