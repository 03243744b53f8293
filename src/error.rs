/// Errors that occurred while turning an event into its wire representation.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The schema-tagged envelope failed to serialize to JSON.
    ///
    /// Note: This is an error in this crate. If you spot this, please open an
    /// issue.
    #[error("serializing event envelope failed with {0}")]
    SerializeEnvelope(serde_json::Error),
}
