//! Lenient identifier decoding.
//!
//! The catalog API is not strict about identifier types: some deployments
//! send `"1"`, others send `1`. Both are normalized to the same `String` so
//! that company lookups keep matching whatever the server chose.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// `deserialize_with` target accepting a JSON string or number.
pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Integer(value) => value.to_string(),
        RawId::Float(value) if value.fract() == 0.0 && value.abs() < i64::MAX as f64 => {
            (value as i64).to_string()
        }
        RawId::Float(value) => value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "super::deserialize")]
        id: String,
    }

    #[rstest]
    #[case::string(r#"{"id":"1"}"#, "1")]
    #[case::integer(r#"{"id":1}"#, "1")]
    #[case::integral_float(r#"{"id":3.0}"#, "3")]
    #[case::fractional_float(r#"{"id":2.5}"#, "2.5")]
    #[case::opaque_string(r#"{"id":"abc-42"}"#, "abc-42")]
    fn normalizes_identifier(#[case] json: &str, #[case] expected: &str) {
        let wrapper: Wrapper = serde_json::from_str(json).unwrap();
        assert_eq!(wrapper.id, expected);
    }

    #[test]
    fn rejects_non_scalar_identifier() {
        assert!(serde_json::from_str::<Wrapper>(r#"{"id":[1]}"#).is_err());
    }
}
