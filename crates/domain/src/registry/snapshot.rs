use rustc_hash::FxHashMap;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::DomainError;

/// One accepted registry record, namespace prefix already stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryRecord {
    pub name: Arc<str>,
    pub value: Arc<str>,
}

/// Immutable name → raw value mapping built from a single name scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameSnapshot {
    entries: FxHashMap<Arc<str>, Arc<str>>,
}

impl NameSnapshot {
    /// Build a snapshot from a raw `name_scan` response body.
    ///
    /// The body must be a JSON object whose `result` is an array of
    /// `{"name": <string>, "value": <string>}` objects. Any structural fault
    /// rejects the whole response. Records whose name does not start with
    /// `prefix` (or is nothing but the prefix) are skipped; a later duplicate
    /// name replaces an earlier one.
    pub fn from_scan_response(body: &str, prefix: &str) -> Result<Self, DomainError> {
        let root: Value = serde_json::from_str(body)
            .map_err(|e| DomainError::MalformedResponse(format!("invalid JSON: {}", e)))?;

        let results = root
            .get("result")
            .and_then(Value::as_array)
            .ok_or_else(|| DomainError::MalformedResponse("result is not an array".to_string()))?;

        let mut entries = FxHashMap::default();
        entries.reserve(results.len());

        for (i, item) in results.iter().enumerate() {
            let index = i + 1;
            let record = item.as_object().ok_or_else(|| DomainError::MalformedRecord {
                index,
                reason: "not an object".to_string(),
            })?;

            let name = record
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| DomainError::MalformedRecord {
                    index,
                    reason: "name is not a string".to_string(),
                })?;

            let value = record
                .get("value")
                .and_then(Value::as_str)
                .ok_or_else(|| DomainError::MalformedRecord {
                    index,
                    reason: "value is not a string".to_string(),
                })?;

            if let Some(short) = name.strip_prefix(prefix).filter(|s| !s.is_empty()) {
                entries.insert(Arc::from(short), Arc::from(value));
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, name: &str) -> Option<&Arc<str>> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = RegistryRecord> + '_ {
        self.entries.iter().map(|(name, value)| RegistryRecord {
            name: Arc::clone(name),
            value: Arc::clone(value),
        })
    }
}
