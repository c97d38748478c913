use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelId(pub Uuid);

impl ChannelId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ChannelId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> anyhow::Result<Self> {
        Uuid::from_string(s).map(ChannelId)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A tracked YouTube channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeChannel {
    pub id: ChannelId,
    pub title: String,
    /// Channel handle including the leading `@`.
    pub handle: String,
    pub description: Option<String>,
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<u64>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl YoutubeChannel {
    pub fn new_for_insert(dto: &YoutubeChannelDto) -> Self {
        Self {
            id: ChannelId::new_v4(),
            title: dto.title.trim().to_string(),
            handle: normalize_handle(&dto.handle),
            description: dto.description.clone(),
            subscriber_count: dto.subscriber_count,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn channel_url(&self) -> String {
        format!("https://www.youtube.com/{}", self.handle)
    }
}

impl AggregateRoot for YoutubeChannel {
    type Id = ChannelId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "youtube_channel"
    }

    fn api_resource() -> &'static str {
        "/api/youtube/channels"
    }

    fn element_label_key() -> &'static str {
        "channel-element"
    }

    fn list_label_key() -> &'static str {
        "channel-list"
    }
}

/// Prefixes the handle with `@` and strips surrounding whitespace.
pub fn normalize_handle(raw: &str) -> String {
    let trimmed = raw.trim().trim_start_matches('@');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("@{}", trimmed)
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload. `id == None` means create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct YoutubeChannelDto {
    pub id: Option<String>,
    pub title: String,
    pub handle: String,
    pub description: Option<String>,
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<u64>,
}

impl YoutubeChannelDto {
    /// Validates the form. The error is a translation key.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("validation-title-required");
        }
        let handle = normalize_handle(&self.handle);
        if handle.is_empty() {
            return Err("validation-handle-required");
        }
        if handle[1..]
            .chars()
            .any(|c| !(c.is_alphanumeric() || matches!(c, '_' | '-' | '.')))
        {
            return Err("validation-handle-invalid");
        }
        Ok(())
    }
}

impl From<&YoutubeChannel> for YoutubeChannelDto {
    fn from(channel: &YoutubeChannel) -> Self {
        Self {
            id: Some(channel.id.as_string()),
            title: channel.title.clone(),
            handle: channel.handle.clone(),
            description: channel.description.clone(),
            subscriber_count: channel.subscriber_count,
        }
    }
}
