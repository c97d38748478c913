use crate::shared::api_utils::api_base;
use crate::shared::config::use_app_config;
use crate::shared::store::RestStore;
use contracts::domain::a002_youtube_video::{YoutubeVideo, YoutubeVideoDto};

pub type VideoStore = RestStore<YoutubeVideo, YoutubeVideoDto>;

pub fn video_store() -> VideoStore {
    RestStore::new(api_base(&use_app_config().api))
}
