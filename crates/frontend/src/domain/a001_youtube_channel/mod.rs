pub mod api;
pub mod ui;

use crate::routes::model::{RouteMeta, RouteNode};
use crate::routes::table::{RouteContribution, MEDIA_ROUTE_NAME};
use crate::shared::edit_form::EditForm;
use contracts::domain::a001_youtube_channel::aggregate::normalize_handle;
use contracts::domain::a001_youtube_channel::YoutubeChannelDto;

pub const CHANNELS_ROUTE_NAME: &str = "channels";

pub fn route() -> RouteContribution {
    RouteContribution::under(
        MEDIA_ROUTE_NAME,
        RouteNode::new("channels", CHANNELS_ROUTE_NAME).meta(
            RouteMeta::new()
                .label_key("nav-channels")
                .icon("channel")
                .order(0),
        ),
    )
}

impl EditForm for YoutubeChannelDto {
    fn validate(&self) -> Result<(), &'static str> {
        YoutubeChannelDto::validate(self)
    }

    fn prepared(&self) -> Self {
        let mut dto = self.clone();
        dto.title = dto.title.trim().to_string();
        dto.handle = normalize_handle(&dto.handle);
        dto.description = dto
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        dto
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepared_cleans_form() {
        let dto = YoutubeChannelDto {
            title: " Rust ".to_string(),
            handle: "rustlang".to_string(),
            description: Some("   ".to_string()),
            ..Default::default()
        };
        let prepared = dto.prepared();
        assert_eq!(prepared.title, "Rust");
        assert_eq!(prepared.handle, "@rustlang");
        assert_eq!(prepared.description, None);
        assert_eq!(EditForm::validate(&prepared), Ok(()));
    }
}
