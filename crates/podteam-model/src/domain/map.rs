use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// String-to-string map used for pod annotations and node selectors.
///
/// Backed by a [`BTreeMap`] so iteration and serialization order are stable.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(transparent)]
pub struct StringMap(pub BTreeMap<String, String>);

impl StringMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Insert or overwrite an entry, returning the previous value.
    pub fn insert<K, V>(&mut self, key: K, val: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), val.into())
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    /// Iterate through all entries as `(&str, &str)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for StringMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::StringMap;

    #[test]
    fn insert_returns_previous_value() {
        let mut map = StringMap::new();
        assert_eq!(map.insert("a", "1"), None);
        assert_eq!(map.insert("a", "2"), Some("1".to_string()));
        assert_eq!(map.get("a"), Some("2"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn serializes_as_plain_object() {
        let map: StringMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);

        let back: StringMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
