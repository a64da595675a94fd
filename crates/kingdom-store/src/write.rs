use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Value of one written field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(Value),
    /// Replaced by the store with its own clock when the write lands.
    ServerTimestamp,
}

/// Field writes, applied in insertion order.
///
/// Paths may be dotted (`votes.Ducky`); each segment but the last names a
/// nested map, created on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields {
    entries: Vec<(String, FieldValue)>,
}

impl Fields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encodes every field of a serializable record.
    ///
    /// `None` options that the record skips are simply absent.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self, StoreError> {
        match serde_json::to_value(record)? {
            Value::Object(map) => Ok(Self::from_map(map)),
            other => Err(StoreError::InvalidPath(format!(
                "record must encode as a map, got {other}"
            ))),
        }
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(k, v)| (k, FieldValue::Value(v)))
                .collect(),
        }
    }

    pub fn set(mut self, path: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((path.into(), FieldValue::Value(value.into())));
        self
    }

    /// Sets `path` to a serializable value.
    pub fn set_serialized<T: Serialize>(
        self,
        path: impl Into<String>,
        value: &T,
    ) -> Result<Self, StoreError> {
        let value = serde_json::to_value(value)?;
        Ok(self.set(path, value))
    }

    /// Asks the store to stamp `path` with its own clock.
    pub fn server_timestamp(mut self, path: impl Into<String>) -> Self {
        self.entries.push((path.into(), FieldValue::ServerTimestamp));
        self
    }

    /// Drops every write to `path`. Used to keep callers from overriding
    /// store-managed fields such as the document id.
    pub fn without(mut self, path: &str) -> Self {
        self.entries.retain(|(p, _)| p != path);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v))
    }

    /// Writes every entry into `target`, resolving server timestamps to
    /// `stamp`.
    pub(crate) fn apply_to(&self, target: &mut Map<String, Value>, stamp: &Value) -> Result<(), StoreError> {
        for (path, value) in &self.entries {
            let value = match value {
                FieldValue::Value(v) => v.clone(),
                FieldValue::ServerTimestamp => stamp.clone(),
            };
            set_path(target, path, value)?;
        }
        Ok(())
    }

    pub(crate) fn needs_timestamp(&self) -> bool {
        self.entries
            .iter()
            .any(|(_, v)| matches!(v, FieldValue::ServerTimestamp))
    }
}

fn set_path(target: &mut Map<String, Value>, path: &str, value: Value) -> Result<(), StoreError> {
    let mut segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(StoreError::InvalidPath(path.to_string()));
    }
    let last = segments.pop().ok_or_else(|| StoreError::InvalidPath(path.to_string()))?;

    let mut node = target;
    for segment in segments {
        let entry = node
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        node = match entry {
            Value::Object(map) => map,
            _ => return Err(StoreError::InvalidPath(path.to_string())),
        };
    }
    node.insert(last.to_string(), value);
    Ok(())
}
