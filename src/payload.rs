use crate::Error;
use serde::Serialize;
use std::collections::BTreeMap;

/// An event's data section: a mapping from payload key to string value.
///
/// A field left unset on an event is an absent key in here, never a null
/// value.
pub type Payload = BTreeMap<String, String>;

/// A payload tagged with the schema identifier describing it.
///
/// This is the wire shape the tracker hands to transport:
/// `{"schema":"<uri>","data":{...}}`. Downstream validates the data section
/// against the schema the URI points at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelfDescribingJson {
    /// Versioned schema URI for the data section.
    pub schema: String,
    /// The event's key/value data section.
    pub data: Payload,
}

impl SelfDescribingJson {
    /// Pair a schema URI with its data section.
    pub fn new(schema: impl Into<String>, data: Payload) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }

    /// Serialize to the JSON wire format.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(self).map_err(Error::SerializeEnvelope)
    }
}
