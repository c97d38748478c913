pub mod api;
pub mod ui;

use crate::routes::model::{RouteMeta, RouteNode};
use crate::routes::table::{RouteContribution, MEDIA_ROUTE_NAME};
use crate::shared::edit_form::EditForm;
use contracts::domain::a002_youtube_video::YoutubeVideoDto;

pub const VIDEOS_ROUTE_NAME: &str = "videos";

pub fn route() -> RouteContribution {
    RouteContribution::under(
        MEDIA_ROUTE_NAME,
        RouteNode::new("videos", VIDEOS_ROUTE_NAME).meta(
            RouteMeta::new()
                .label_key("nav-videos")
                .icon("video")
                .order(1),
        ),
    )
}

impl EditForm for YoutubeVideoDto {
    fn validate(&self) -> Result<(), &'static str> {
        YoutubeVideoDto::validate(self)
    }

    fn prepared(&self) -> Self {
        self.normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepared_extracts_video_key() {
        let dto = YoutubeVideoDto {
            title: "Talk ".to_string(),
            video_key: "https://youtu.be/dQw4w9WgXcQ?t=3".to_string(),
            ..Default::default()
        };
        let prepared = dto.prepared();
        assert_eq!(prepared.video_key, "dQw4w9WgXcQ");
        assert_eq!(prepared.title, "Talk");
        assert_eq!(EditForm::validate(&prepared), Err("validation-channel-required"));
    }
}
