//! Self-describing event types for a mobile analytics tracker.
//!
//! Each event type in this crate carries a fixed, versioned schema URI and
//! reduces to a string key/value payload. Fields left unset are omitted from
//! the payload rather than serialized as null, so downstream schema
//! validation only ever sees keys that were explicitly set.
//!
//! # Usage
//!
//! Build an event with the fluent setters and extract its schema-tagged
//! envelope:
//!
//! ```rust
//! use mobile_analytics_events::{ScreenView, SelfDescribing, SCHEMA_SCREEN_VIEW};
//!
//! let event = ScreenView::new()
//!     .name("checkout")
//!     .screen_type("feed")
//!     .transition_type("push");
//!
//! let envelope = event.envelope();
//! assert_eq!(SCHEMA_SCREEN_VIEW, envelope.schema);
//! assert_eq!("checkout", envelope.data["name"]);
//! ```
//!
//! Queueing, transport and persistence of serialized envelopes are the
//! tracker's concern and live outside this crate.
#![doc(html_root_url = "https://docs.rs/mobile-analytics-events/0.1.0")]
#![deny(missing_docs, unreachable_pub, missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

mod error;
pub mod events;
mod payload;

pub use error::Error;
pub use events::{ScreenView, SelfDescribing, SCHEMA_SCREEN_VIEW};
pub use payload::{Payload, SelfDescribingJson};
