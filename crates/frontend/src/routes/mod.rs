//! Routing: the route metadata model, the route table and the page registry
//! mapping a resolved route name to its page.

pub mod model;
pub mod table;

pub use table::RouteTable;

use crate::domain::a001_youtube_channel::CHANNELS_ROUTE_NAME;
use crate::domain::a002_youtube_video::VIDEOS_ROUTE_NAME;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::media::MediaPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;
use model::SETTINGS_ROUTE_NAME;
use table::{HOME_ROUTE_NAME, MEDIA_ROUTE_NAME};

pub fn use_route_table() -> RouteTable {
    use_context::<RouteTable>().expect("RouteTable not provided in context")
}

/// Page that renders the route named `name`. The media routes share one
/// page so that moving between its tabs keeps it mounted.
fn page_of(name: Option<&str>) -> Option<&str> {
    match name {
        Some(CHANNELS_ROUTE_NAME | VIDEOS_ROUTE_NAME) => Some(MEDIA_ROUTE_NAME),
        other => other,
    }
}

/// Media tab addressed by the route named `name`, if any.
fn media_tab_of(name: Option<&str>) -> Option<String> {
    name.filter(|n| *n == CHANNELS_ROUTE_NAME || *n == VIDEOS_ROUTE_NAME)
        .map(str::to_string)
}

/// Page for the route named `name`; unknown names get the not-found page.
/// `route` is the live route name, from which shared pages read their tab.
pub fn render_route(name: Option<&str>, route: Signal<Option<String>>) -> AnyView {
    match page_of(name) {
        Some(HOME_ROUTE_NAME) => view! { <HomePage /> }.into_any(),
        Some(MEDIA_ROUTE_NAME) => {
            let tab = Signal::derive(move || route.with(|r| media_tab_of(r.as_deref())));
            view! { <MediaPage tab=tab /> }.into_any()
        }
        Some(SETTINGS_ROUTE_NAME) => view! { <SettingsPage /> }.into_any(),
        other => {
            if let Some(name) = other {
                log::warn!("route '{}' has no page", name);
            }
            view! { <NotFoundPage /> }.into_any()
        }
    }
}

/// Resolves the browser path against the route table and renders the page.
/// The page is rebuilt only when the location moves to another page.
#[component]
fn RoutedPage() -> impl IntoView {
    let table = use_route_table();
    let pathname = use_location().pathname;
    let route_name = Memo::new(move |_| {
        pathname.with(|path| table.resolve(path).map(|resolved| resolved.node.name.clone()))
    });
    let page = Memo::new(move |_| route_name.with(|name| page_of(name.as_deref()).map(str::to_string)));

    move || render_route(page.get().as_deref(), route_name.into())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/*any") view=RoutedPage />
                </Routes>
            </Shell>
        </Router>
    }
}
