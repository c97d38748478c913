pub mod a001_youtube_channel;
pub mod a002_youtube_video;

use crate::routes::table::RouteContribution;

/// Routes the feature modules add to the shell's route tree.
pub fn route_contributions() -> Vec<RouteContribution> {
    vec![a001_youtube_channel::route(), a002_youtube_video::route()]
}

#[cfg(test)]
mod tests {
    use crate::layout::drawer::projection::{project_drawer, settings_entry};
    use crate::routes::model::validate_routes;
    use crate::routes::RouteTable;

    #[test]
    fn test_application_route_tree() {
        let table = RouteTable::build();
        assert!(validate_routes(table.routes()).is_empty());

        let items = project_drawer(table.routes());
        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["home", "media"]);
        let hrefs: Vec<&str> = items[1].children.iter().map(|c| c.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/media/channels", "/media/videos"]);
        assert_eq!(settings_entry(table.routes()).map(|s| s.href), Some("/settings".to_string()));
    }
}
