//! Decoding helpers for documents written by Kubernetes clients.
use serde::{Deserialize, Deserializer};

/// Decode an explicit `null` as the type's default.
///
/// Clients serializing nil lists or maps without `omitempty` write `null`, which
/// must read the same as an absent or empty value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::null_as_default;

    #[derive(Debug, Deserialize)]
    struct Doc {
        #[serde(default, deserialize_with = "null_as_default")]
        items: Vec<String>,
    }

    #[test]
    fn null_absent_and_empty_read_the_same() {
        for text in [r#"{"items":null}"#, r#"{}"#, r#"{"items":[]}"#] {
            let doc: Doc = serde_json::from_str(text).unwrap();
            assert!(doc.items.is_empty(), "{text}");
        }
    }

    #[test]
    fn values_pass_through() {
        let doc: Doc = serde_json::from_str(r#"{"items":["a","b"]}"#).unwrap();
        assert_eq!(doc.items, vec!["a", "b"]);
    }
}
