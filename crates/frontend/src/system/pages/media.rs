//! Media page: channels and videos as two tabs, with the tab strip hosted
//! in the sticky bar under the toolbar.

use crate::domain::a001_youtube_channel::ui::list::ChannelList;
use crate::domain::a001_youtube_channel::CHANNELS_ROUTE_NAME;
use crate::domain::a002_youtube_video::ui::list::VideoList;
use crate::domain::a002_youtube_video::VIDEOS_ROUTE_NAME;
use crate::layout::tabs::{use_sticky_tabs, TabContainer, TabDescriptor, TabPanel};
use crate::routes::{use_route_table, RouteTable};
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

pub fn media_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new(CHANNELS_ROUTE_NAME, "tab-channels").icon("channel"),
        TabDescriptor::new(VIDEOS_ROUTE_NAME, "tab-videos").icon("video"),
    ]
}

/// Route to follow after `tab` was picked, unless the location already is
/// that route. Tabs without a route of their own stay where they are.
fn tab_location(table: &RouteTable, pathname: &str, tab: &str) -> Option<String> {
    let path = table.path_of(tab)?;
    let already_there = table
        .resolve(pathname)
        .is_some_and(|resolved| resolved.node.name == tab);
    (!already_there).then_some(path)
}

#[component]
pub fn MediaPage(
    /// Tab requested by the location; `None` keeps the current selection,
    /// starting at the first tab.
    #[prop(into)]
    tab: Signal<Option<String>>,
) -> impl IntoView {
    let tabs = media_tabs();
    let selected = use_sticky_tabs("media", tabs.clone(), tab);

    let table = use_route_table();
    let pathname = use_location().pathname;
    let navigate = use_navigate();
    Effect::new(move |previous: Option<String>| {
        let current = selected.get();
        if previous.is_some_and(|p| p != current) {
            let target = pathname.with_untracked(|p| tab_location(&table, p, &current));
            if let Some(path) = target {
                navigate(&path, Default::default());
            }
        }
        current
    });

    view! {
        <TabContainer tabs=tabs selected=selected hide_strip=true>
            <TabPanel slot id=CHANNELS_ROUTE_NAME>
                <ChannelList />
            </TabPanel>
            <TabPanel slot id=VIDEOS_ROUTE_NAME>
                <VideoList />
            </TabPanel>
        </TabContainer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_location_follows_picked_tab() {
        let table = RouteTable::build();
        assert_eq!(
            tab_location(&table, "/media/channels", VIDEOS_ROUTE_NAME).as_deref(),
            Some("/media/videos")
        );
        assert_eq!(
            tab_location(&table, "/media", CHANNELS_ROUTE_NAME).as_deref(),
            Some("/media/channels")
        );
    }

    #[test]
    fn test_tab_location_stays_on_matching_route() {
        let table = RouteTable::build();
        assert_eq!(tab_location(&table, "/media/videos", VIDEOS_ROUTE_NAME), None);
        assert_eq!(tab_location(&table, "/media/videos/", VIDEOS_ROUTE_NAME), None);
        assert_eq!(tab_location(&table, "/media/videos", ""), None);
        assert_eq!(tab_location(&table, "/media", "playlists"), None);
    }
}
