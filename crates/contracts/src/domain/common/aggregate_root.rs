use super::{AggregateId, EntityMetadata};

/// Root of a media-tracker aggregate.
///
/// Instance methods expose the record itself; the associated functions
/// describe the aggregate class (REST resource, translation keys).
pub trait AggregateRoot {
    type Id: AggregateId;

    fn id(&self) -> Self::Id;

    /// Human readable title of the record, used in dialogs and toasts.
    fn display_name(&self) -> &str;

    fn metadata(&self) -> &EntityMetadata;

    /// Aggregate index, e.g. "a001".
    fn aggregate_index() -> &'static str;

    /// Collection name, e.g. "youtube_channel".
    fn collection_name() -> &'static str;

    /// REST resource path, relative to the API base.
    fn api_resource() -> &'static str;

    /// Translation key for a single element ("Channel").
    fn element_label_key() -> &'static str;

    /// Translation key for the list ("Channels").
    fn list_label_key() -> &'static str;

    /// Full aggregate name, e.g. "a001_youtube_channel".
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Path of a single record within the resource.
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::api_resource(), id)
    }
}
