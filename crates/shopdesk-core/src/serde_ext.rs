//! Lenient numeric decoding.
//!
//! Postgres `NUMERIC` columns reach the client as JSON strings (`"19.99"`)
//! while computed values arrive as numbers; both decode to `f64`.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
}

fn parse<E: Error>(value: NumberOrString) -> Result<f64, E> {
    match value {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("expected a decimal, got {:?}", s))),
    }
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    parse(NumberOrString::deserialize(deserializer)?)
}

pub fn lenient_opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => parse(value).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Priced {
        #[serde(deserialize_with = "super::lenient_f64")]
        price: f64,
        #[serde(default, deserialize_with = "super::lenient_opt_f64")]
        sale: Option<f64>,
    }

    #[test]
    fn test_accepts_numbers_and_strings() {
        let a: Priced = serde_json::from_str(r#"{"price": 19.5, "sale": "12.00"}"#).unwrap();
        assert_eq!(a.price, 19.5);
        assert_eq!(a.sale, Some(12.0));

        let b: Priced = serde_json::from_str(r#"{"price": "7", "sale": null}"#).unwrap();
        assert_eq!(b.price, 7.0);
        assert_eq!(b.sale, None);

        let c: Priced = serde_json::from_str(r#"{"price": 1}"#).unwrap();
        assert_eq!(c.sale, None);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(serde_json::from_str::<Priced>(r#"{"price": "cheap"}"#).is_err());
    }
}
