use crate::domain::a001_youtube_channel::ChannelId;
use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(pub Uuid);

impl VideoId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for VideoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> anyhow::Result<Self> {
        Uuid::from_string(s).map(VideoId)
    }
}

/// Length of a YouTube video key, e.g. `dQw4w9WgXcQ`.
pub const VIDEO_KEY_LEN: usize = 11;

// ============================================================================
// Aggregate Root
// ============================================================================

/// A tracked video, always owned by a channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YoutubeVideo {
    pub id: VideoId,
    #[serde(rename = "channelId")]
    pub channel_id: ChannelId,
    pub title: String,
    #[serde(rename = "videoKey")]
    pub video_key: String,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: Option<u32>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<NaiveDate>,
    #[serde(default)]
    pub watched: bool,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl YoutubeVideo {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_key)
    }

    /// `h:mm:ss` for videos of an hour or longer, `m:ss` otherwise.
    pub fn formatted_duration(&self) -> Option<String> {
        self.duration_seconds.map(format_duration)
    }
}

pub fn format_duration(total: u32) -> String {
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

impl AggregateRoot for YoutubeVideo {
    type Id = VideoId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "youtube_video"
    }

    fn api_resource() -> &'static str {
        "/api/youtube/videos"
    }

    fn element_label_key() -> &'static str {
        "video-element"
    }

    fn list_label_key() -> &'static str {
        "video-list"
    }
}

/// Accepts a bare key or any of the usual watch/share/shorts URLs.
pub fn extract_video_key(input: &str) -> Option<String> {
    let input = input.trim();
    let candidate = if let Some((_, query)) = input.split_once("watch?") {
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix("v="))
            .unwrap_or_default()
    } else if let Some((_, rest)) = input.split_once("youtu.be/") {
        rest
    } else if let Some((_, rest)) = input.split_once("/shorts/") {
        rest
    } else {
        input
    };
    let key: String = candidate
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
        .collect();
    (key.len() == VIDEO_KEY_LEN).then_some(key)
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct YoutubeVideoDto {
    pub id: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: String,
    pub title: String,
    #[serde(rename = "videoKey")]
    pub video_key: String,
    #[serde(rename = "durationSeconds")]
    pub duration_seconds: Option<u32>,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<NaiveDate>,
    pub watched: bool,
}

impl YoutubeVideoDto {
    /// Validates the form. The error is a translation key.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("validation-title-required");
        }
        if ChannelId::from_string(&self.channel_id).is_err() {
            return Err("validation-channel-required");
        }
        if extract_video_key(&self.video_key).is_none() {
            return Err("validation-video-key-invalid");
        }
        Ok(())
    }

    /// Copy of the form with the video key reduced to its canonical form.
    pub fn normalized(&self) -> Self {
        let mut dto = self.clone();
        dto.title = dto.title.trim().to_string();
        if let Some(key) = extract_video_key(&self.video_key) {
            dto.video_key = key;
        }
        dto
    }
}

impl From<&YoutubeVideo> for YoutubeVideoDto {
    fn from(video: &YoutubeVideo) -> Self {
        Self {
            id: Some(video.id.as_string()),
            channel_id: video.channel_id.as_string(),
            title: video.title.clone(),
            video_key: video.video_key.clone(),
            duration_seconds: video.duration_seconds,
            published_at: video.published_at,
            watched: video.watched,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_key() {
        let key = Some("dQw4w9WgXcQ".to_string());
        assert_eq!(extract_video_key("dQw4w9WgXcQ"), key);
        assert_eq!(
            extract_video_key("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"),
            key
        );
        assert_eq!(
            extract_video_key("https://www.youtube.com/watch?list=PL1&v=dQw4w9WgXcQ"),
            key
        );
        assert_eq!(extract_video_key("https://youtu.be/dQw4w9WgXcQ?si=abc"), key);
        assert_eq!(extract_video_key("https://youtube.com/shorts/dQw4w9WgXcQ"), key);
        assert_eq!(extract_video_key("short"), None);
        assert_eq!(extract_video_key(""), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(245), "4:05");
        assert_eq!(format_duration(3723), "1:02:03");
    }

    #[test]
    fn test_validate() {
        let valid = YoutubeVideoDto {
            channel_id: uuid::Uuid::new_v4().to_string(),
            title: "Intro".to_string(),
            video_key: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            ..Default::default()
        };
        assert_eq!(valid.validate(), Ok(()));
        assert_eq!(valid.normalized().video_key, "dQw4w9WgXcQ");

        let no_channel = YoutubeVideoDto {
            channel_id: String::new(),
            ..valid.clone()
        };
        assert_eq!(no_channel.validate(), Err("validation-channel-required"));

        let bad_key = YoutubeVideoDto {
            video_key: "nope".to_string(),
            ..valid.clone()
        };
        assert_eq!(bad_key.validate(), Err("validation-video-key-invalid"));

        let no_title = YoutubeVideoDto {
            title: " ".to_string(),
            ..valid
        };
        assert_eq!(no_title.validate(), Err("validation-title-required"));
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = serde_json::json!({
            "id": "6f1f4a57-7b0e-4c43-9d38-0a2c5f0f7c11",
            "channelId": "0b0f5a7e-24f5-4e53-a6c4-7f1b8f3a3d21",
            "title": "Intro",
            "videoKey": "dQw4w9WgXcQ",
            "durationSeconds": 212,
            "publishedAt": "2009-10-25",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z"
        });
        let video: YoutubeVideo = serde_json::from_value(json).unwrap();
        assert!(!video.watched);
        assert_eq!(video.metadata.version, 0);
        assert_eq!(video.formatted_duration().as_deref(), Some("3:32"));
        assert_eq!(video.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
    }
}
