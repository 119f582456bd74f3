//! Parsed query-string mapping.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Value stored under a query key.
///
/// `None` entries come from tokens without `=` (`?flag`).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Key seen once.
    Single(Option<String>),
    /// Key seen two or more times, values in encounter order.
    Multiple(Vec<Option<String>>),
}

impl QueryValue {
    /// Record another occurrence of the same key.
    ///
    /// The first repeat promotes a scalar to a two-element list.
    pub fn push(&mut self, value: Option<String>) {
        match self {
            Self::Single(first) => {
                let first = first.take();
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }

    /// The scalar string, if the key was seen once with a value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => value.as_deref(),
            Self::Multiple(_) => None,
        }
    }

    /// First recorded value.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => value.as_deref(),
            Self::Multiple(values) => values.first().and_then(|v| v.as_deref()),
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    pub fn to_value(&self) -> Value {
        fn scalar(value: &Option<String>) -> Value {
            value.clone().map_or(Value::Null, Value::String)
        }

        match self {
            Self::Single(value) => scalar(value),
            Self::Multiple(values) => Value::Array(values.iter().map(scalar).collect()),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Single(Some(value.to_string()))
    }
}

/// Key/value pairs in first-occurrence order with unique keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryMap {
    entries: Vec<(String, QueryValue)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `key`, merging with an earlier occurrence.
    pub fn append(&mut self, key: String, value: Option<String>) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, stored)) => stored.push(value),
            None => self.entries.push((key, QueryValue::Single(value))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// First string value under `key`, skipping the list/scalar distinction.
    pub fn get_first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::first)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Convert to a JSON object, e.g. for [`crate::filter_empty_params`].
    pub fn to_value(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(key, value)| (key.clone(), value.to_value()))
            .collect()
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_promotes_then_extends() {
        let mut map = QueryMap::new();
        map.append("k".into(), Some("a".into()));
        assert_eq!(map.get("k"), Some(&QueryValue::from("a")));

        map.append("k".into(), Some("b".into()));
        assert_eq!(
            map.get("k"),
            Some(&QueryValue::Multiple(vec![Some("a".into()), Some("b".into())]))
        );

        map.append("k".into(), None);
        assert_eq!(
            map.get("k"),
            Some(&QueryValue::Multiple(vec![
                Some("a".into()),
                Some("b".into()),
                None
            ]))
        );
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_first("k"), Some("a"));
    }

    #[test]
    fn test_absent_value_still_counts_as_present() {
        let mut map = QueryMap::new();
        map.append("flag".into(), None);
        map.append("flag".into(), Some("on".into()));
        assert_eq!(
            map.get("flag"),
            Some(&QueryValue::Multiple(vec![None, Some("on".into())]))
        );
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let mut map = QueryMap::new();
        map.append("z".into(), Some("1".into()));
        map.append("a".into(), None);
        map.append("z".into(), Some("2".into()));

        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"z":["1","2"],"a":null}"#
        );
        assert_eq!(
            Value::Object(map.to_value()),
            json!({ "z": ["1", "2"], "a": null })
        );
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
    }
}
