use crate::shared::api_utils::api_base;
use crate::shared::config::use_app_config;
use crate::shared::store::RestStore;
use contracts::domain::a001_youtube_channel::{YoutubeChannel, YoutubeChannelDto};

pub type ChannelStore = RestStore<YoutubeChannel, YoutubeChannelDto>;

/// Channel store pointed at the configured backend.
pub fn channel_store() -> ChannelStore {
    RestStore::new(api_base(&use_app_config().api))
}
