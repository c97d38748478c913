pub mod aggregate;

pub use aggregate::{extract_video_key, VideoId, YoutubeVideo, YoutubeVideoDto};
