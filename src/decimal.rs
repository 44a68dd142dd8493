//! Serde helpers for decimal amounts.
//!
//! The backend stores prices and amounts as fixed-point decimals. Depending on
//! the endpoint they arrive as JSON numbers (`12.5`) or as decimal strings
//! (`"12.50"`). Both forms deserialize to `f64`; serialization always writes
//! a number.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(n) => Ok(n),
            Self::String(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid decimal amount '{s}'"))),
        }
    }
}

/// Deserializes a required amount.
pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_f64()
}

/// Deserializes an optional amount; `null` and a missing field are `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NumberOrString>::deserialize(deserializer)?
        .map(NumberOrString::into_f64)
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "super::deserialize")]
        price: f64,
        #[serde(default, deserialize_with = "super::deserialize_option")]
        discount: Option<f64>,
    }

    #[test]
    fn test_accepts_number_and_string() {
        let a: Priced = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        let b: Priced = serde_json::from_str(r#"{"price": "12.50"}"#).unwrap();
        assert!((a.price - 12.5).abs() < f64::EPSILON);
        assert!((b.price - 12.5).abs() < f64::EPSILON);
        assert!(a.discount.is_none());
    }

    #[test]
    fn test_optional_amount() {
        let p: Priced = serde_json::from_str(r#"{"price": 1, "discount": "0.25"}"#).unwrap();
        assert_eq!(p.discount, Some(0.25));

        let p: Priced = serde_json::from_str(r#"{"price": 1, "discount": null}"#).unwrap();
        assert!(p.discount.is_none());
    }

    #[test]
    fn test_rejects_non_numeric_string() {
        let result: Result<Priced, _> = serde_json::from_str(r#"{"price": "abc"}"#);
        assert!(result.is_err());
    }
}
