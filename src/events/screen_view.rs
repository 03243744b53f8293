//! The screen view event, reported whenever the user lands on a new screen.

use crate::{Payload, SelfDescribing};

/// Schema URI for the screen view event.
pub const SCHEMA_SCREEN_VIEW: &str =
    "iglu:com.snowplowanalytics.mobile/screen_view/jsonschema/1-0-0";

/// Payload key for the screen view id.
pub const PARAM_ID: &str = "id";
/// Payload key for the screen name.
pub const PARAM_NAME: &str = "name";
/// Payload key for the previous screen view id.
pub const PARAM_PREVIOUS_ID: &str = "previousId";
/// Payload key for the previous screen name.
pub const PARAM_PREVIOUS_NAME: &str = "previousName";
/// Payload key for the previous screen type.
pub const PARAM_PREVIOUS_TYPE: &str = "previousType";
/// Payload key for the transition type.
pub const PARAM_TRANSITION_TYPE: &str = "transitionType";
/// Payload key for the screen type.
pub const PARAM_TYPE: &str = "type";

/// A view of a single screen.
///
/// Every field is optional; only fields that were set end up in the data
/// payload. Fields can be set directly or through the fluent setters:
///
/// ```rust
/// use mobile_analytics_events::{ScreenView, SelfDescribing};
///
/// let event = ScreenView::new()
///     .name("checkout")
///     .screen_type("feed")
///     .transition_type("push");
/// assert!(event.data_payload().contains_key("transitionType"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenView {
    /// An identifier for this screen view.
    pub id: Option<String>,
    /// The name of the screen viewed.
    pub name: Option<String>,
    /// The screen view identifier of the previous screen view.
    pub previous_id: Option<String>,
    /// The name of the previous screen.
    pub previous_name: Option<String>,
    /// The screen type of the previous screen view.
    pub previous_type: Option<String>,
    /// The type of transition that led to the screen being viewed.
    pub transition_type: Option<String>,
    /// The type of screen that was viewed, e.g. feed or carousel. Serialized
    /// under the `type` payload key.
    pub screen_type: Option<String>,
}

impl ScreenView {
    /// Create a screen view with no fields set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the screen view id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the name of the screen viewed.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the id of the previous screen view.
    pub fn previous_id(mut self, previous_id: impl Into<String>) -> Self {
        self.previous_id = Some(previous_id.into());
        self
    }

    /// Set the name of the previous screen.
    pub fn previous_name(mut self, previous_name: impl Into<String>) -> Self {
        self.previous_name = Some(previous_name.into());
        self
    }

    /// Set the screen type of the previous screen view.
    pub fn previous_type(mut self, previous_type: impl Into<String>) -> Self {
        self.previous_type = Some(previous_type.into());
        self
    }

    /// Set the type of transition that led to this screen.
    pub fn transition_type(mut self, transition_type: impl Into<String>) -> Self {
        self.transition_type = Some(transition_type.into());
        self
    }

    /// Set the type of screen that was viewed.
    pub fn screen_type(mut self, screen_type: impl Into<String>) -> Self {
        self.screen_type = Some(screen_type.into());
        self
    }
}

impl SelfDescribing for ScreenView {
    fn schema(&self) -> &'static str {
        SCHEMA_SCREEN_VIEW
    }

    fn data_payload(&self) -> Payload {
        let fields = [
            (PARAM_ID, &self.id),
            (PARAM_NAME, &self.name),
            (PARAM_PREVIOUS_ID, &self.previous_id),
            (PARAM_PREVIOUS_NAME, &self.previous_name),
            (PARAM_PREVIOUS_TYPE, &self.previous_type),
            (PARAM_TRANSITION_TYPE, &self.transition_type),
            (PARAM_TYPE, &self.screen_type),
        ];
        let mut payload = Payload::new();
        for (key, value) in fields {
            if let Some(value) = value {
                payload.insert(key.to_owned(), value.clone());
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn unset_fields_are_absent() {
        let payload = ScreenView::new().data_payload();
        assert!(payload.is_empty());
    }

    #[test_case(|e| e.id("v"), PARAM_ID ; "id")]
    #[test_case(|e| e.name("v"), PARAM_NAME ; "name")]
    #[test_case(|e| e.previous_id("v"), PARAM_PREVIOUS_ID ; "previous id")]
    #[test_case(|e| e.previous_name("v"), PARAM_PREVIOUS_NAME ; "previous name")]
    #[test_case(|e| e.previous_type("v"), PARAM_PREVIOUS_TYPE ; "previous type")]
    #[test_case(|e| e.transition_type("v"), PARAM_TRANSITION_TYPE ; "transition type")]
    #[test_case(|e| e.screen_type("v"), PARAM_TYPE ; "screen type")]
    fn setter_inserts_exactly_one_key(set: fn(ScreenView) -> ScreenView, key: &str) {
        let payload = set(ScreenView::new()).data_payload();
        assert_eq!(Some(&"v".to_owned()), payload.get(key));
        assert_eq!(1, payload.len());
    }

    #[test]
    fn all_fields_round_trip_into_payload() {
        let event = ScreenView {
            id: Some("5d79b1f4-b6df-487c-93c9-9516b4d86bcd".into()),
            name: Some("checkout".into()),
            previous_id: Some("00d71340-342e-4503-a2aa-bbd8b7f69b1f".into()),
            previous_name: Some("basket".into()),
            previous_type: Some("feed".into()),
            transition_type: Some("push".into()),
            screen_type: Some("carousel".into()),
        };
        let payload = event.data_payload();
        assert_eq!(7, payload.len());
        assert_eq!("checkout", payload[PARAM_NAME]);
        assert_eq!("basket", payload[PARAM_PREVIOUS_NAME]);
        assert_eq!("carousel", payload[PARAM_TYPE]);
    }

    #[test]
    fn setter_overwrites_previous_value() {
        let payload = ScreenView::new().name("a").name("b").data_payload();
        assert_eq!(Some(&"b".to_owned()), payload.get(PARAM_NAME));
    }

    #[test]
    fn schema_is_fixed() {
        assert_eq!(SCHEMA_SCREEN_VIEW, ScreenView::new().schema());
        assert_eq!(
            SCHEMA_SCREEN_VIEW,
            ScreenView::new().name("checkout").envelope().schema
        );
    }
}
