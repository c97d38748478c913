pub mod aggregate;

pub use aggregate::{ChannelId, YoutubeChannel, YoutubeChannelDto};
