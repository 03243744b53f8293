//! Event types understood by the tracker.

pub mod screen_view;

pub use screen_view::{ScreenView, SCHEMA_SCREEN_VIEW};

use crate::{Payload, SelfDescribingJson};

/// A tracked event described by a versioned schema.
///
/// Implementors reduce to a string key/value payload plus a fixed schema URI.
/// How the resulting envelope is queued and shipped is the tracker's concern,
/// not the event's.
pub trait SelfDescribing {
    /// The schema URI for this event type. Always the same constant for a
    /// given implementor.
    fn schema(&self) -> &'static str;

    /// Extract the event's data section. Fields left unset are omitted
    /// entirely rather than serialized as null.
    fn data_payload(&self) -> Payload;

    /// Wrap the payload in its schema-tagged envelope.
    fn envelope(&self) -> SelfDescribingJson {
        SelfDescribingJson::new(self.schema(), self.data_payload())
    }
}
