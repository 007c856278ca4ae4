//! Serde helpers for Notion payloads.

use serde::{Deserialize, Deserializer};

/// Deserialize a string field where JSON `null` means empty.
///
/// Pair with `#[serde(default)]` so a missing field is empty too.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Field {
        #[serde(default, deserialize_with = "null_as_empty")]
        value: String,
    }

    #[test]
    fn test_null_is_empty() {
        let field: Field = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_missing_is_empty() {
        let field: Field = serde_json::from_str("{}").unwrap();
        assert_eq!(field.value, "");
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_str::<Field>(r#"{"value":42}"#).is_err());
    }
}
