use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Loosely-typed bag of fields handed over by the host (option data,
/// shipping-method data, fulfillment data).
///
/// Only `id` gets a typed accessor. Everything else is carried through
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataMap(Map<String, Value>);

impl DataMap {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The `id` field, if present and a string
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// True when `id` is a string equal to `expected`
    pub fn has_id(&self, expected: &str) -> bool {
        self.id() == Some(expected)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for DataMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl TryFrom<Value> for DataMap {
    type Error = serde_json::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_id_accessor() {
        let data = DataMap::try_from(json!({ "id": "custom-fulfillment", "zone": 4 })).unwrap();
        assert_eq!(data.id(), Some("custom-fulfillment"));
        assert!(data.has_id("custom-fulfillment"));
        assert_eq!(data.get("zone"), Some(&json!(4)));
    }

    #[test]
    fn test_non_string_id_is_absent() {
        let data = DataMap::try_from(json!({ "id": 42 })).unwrap();
        assert_eq!(data.id(), None);
        assert!(!data.has_id("42"));

        assert_eq!(DataMap::new().id(), None);
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(DataMap::try_from(json!(["id"])).is_err());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let data: DataMap = [("id", json!("x")), ("extra", json!(true))].into_iter().collect();
        assert_eq!(serde_json::to_value(&data).unwrap(), json!({ "id": "x", "extra": true }));
    }
}
