use serde_json::{Map, Value};

use crate::errors::DomainError;

/// A registry value decoded at lookup time.
///
/// Registry values are JSON documents of the form
/// `{"map": {"": "1.2.3.4", "www": ...}}`. Only the bare-name address (the
/// empty sub-label) is answered; other sub-labels are kept but unused.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntry {
    map: Map<String, Value>,
}

impl ResolvedEntry {
    pub fn decode(raw: &str) -> Result<Self, DomainError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| DomainError::MalformedEntry(e.to_string()))?;

        let Value::Object(mut object) = value else {
            return Err(DomainError::MalformedEntry(
                "entry is not an object".to_string(),
            ));
        };

        match object.remove("map") {
            Some(Value::Object(map)) => Ok(Self { map }),
            _ => Err(DomainError::MalformedEntry(
                "map is not an object".to_string(),
            )),
        }
    }

    /// Address registered for the name itself, if it is a string.
    pub fn bare_address(&self) -> Option<&str> {
        self.map.get("").and_then(Value::as_str)
    }

    pub fn sub_labels(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}
