use serde::{Deserialize, Serialize};

use crate::KeyValue;

/// Free-form task metadata.
///
/// Stored as an ordered list of key–value pairs: insertion order is preserved and
/// the same key may appear more than once. Serialized as a plain array.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(pub Vec<KeyValue>);

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append an entry. Existing entries with the same key are kept.
    pub fn push<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.push(KeyValue::new(key, value));
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &KeyValue> {
        self.0.iter()
    }
}

impl FromIterator<KeyValue> for Metadata {
    fn from_iter<I: IntoIterator<Item = KeyValue>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;
    use crate::KeyValue;

    #[test]
    fn duplicates_are_kept_in_order() {
        let mut md = Metadata::new();
        md.push("owner", "a");
        md.push("tag", "x");
        md.push("owner", "b");

        assert_eq!(md.len(), 3);
        assert_eq!(
            md.iter().map(|kv| (kv.key(), kv.value())).collect::<Vec<_>>(),
            [("owner", "a"), ("tag", "x"), ("owner", "b")]
        );
    }

    #[test]
    fn collects_from_pairs() {
        let md: Metadata = [KeyValue::new("k1", "v1"), KeyValue::new("k2", "v2")]
            .into_iter()
            .collect();
        assert_eq!(md.len(), 2);
        assert!(!md.is_empty());
    }

    #[test]
    fn serde_is_transparent_array() {
        let mut md = Metadata::new();
        md.push("k", "v");

        let json = serde_json::to_string(&md).unwrap();
        assert_eq!(json, r#"[{"key":"k","value":"v"}]"#);

        let back: Metadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, md);
    }
}
