use serde::{Deserialize, Serialize};

/// Ordered key–value pair.
///
/// Used for task metadata entries and container launch parameters.
/// Neither side is validated and duplicate keys are legal wherever pairs are collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValue {
    key: String,
    value: String,
}

impl KeyValue {
    /// Create a new pair.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Return a copy of this pair with the value replaced.
    pub fn with_value(&self, value: impl Into<String>) -> Self {
        Self {
            key: self.key.clone(),
            value: value.into(),
        }
    }
}

impl From<(&str, &str)> for KeyValue {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}

impl From<(String, String)> for KeyValue {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::KeyValue;

    #[test]
    fn with_value_keeps_key() {
        let kv = KeyValue::new("volume", "/data:{{mesos.instance}}");
        let resolved = kv.with_value("/data:3");

        assert_eq!(resolved.key(), "volume");
        assert_eq!(resolved.value(), "/data:3");
        assert_eq!(kv.value(), "/data:{{mesos.instance}}");
    }

    #[test]
    fn tuple_conversions_agree() {
        let a: KeyValue = ("owner", "team-a").into();
        let b: KeyValue = (String::from("owner"), String::from("team-a")).into();
        assert_eq!(a, b);
    }

    #[test]
    fn serializes_as_key_value_object() {
        let kv = KeyValue::new("env", "prod");
        let json = serde_json::to_string(&kv).unwrap();
        assert_eq!(json, r#"{"key":"env","value":"prod"}"#);

        let back: KeyValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, kv);
    }
}
