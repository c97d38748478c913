pub mod a001_youtube_channel;
pub mod a002_youtube_video;
pub mod common;
