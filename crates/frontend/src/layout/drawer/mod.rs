//! Navigation drawer: renders the projected route tree as expandable groups
//! and clickable leaves, plus the settings entry in the footer.

pub mod projection;

pub use projection::{project_drawer, settings_entry, NavItem, NavLabel};

use crate::layout::nav_context::use_nav_context;
use crate::routes::use_route_table;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

/// `true` when `pathname` is `href` itself or lies below it.
fn is_within(pathname: &str, href: &str) -> bool {
    pathname == href
        || pathname
            .strip_prefix(href)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Drawer() -> impl IntoView {
    let nav = use_nav_context();
    let table = use_route_table();
    let items = project_drawer(table.routes());
    let pathname = use_location().pathname;

    // Groups containing the current location start expanded.
    let current = pathname.get_untracked();
    let expanded_groups = RwSignal::new(
        items
            .iter()
            .filter(|item| item.is_group() && is_within(&current, &item.href))
            .map(|item| item.key.clone())
            .collect::<Vec<_>>(),
    );

    view! {
        <aside class="app-sidebar" class:hidden=move || !nav.drawer_open.get()>
            <nav class="app-sidebar__content">
                {items
                    .into_iter()
                    .map(|item| view! { <DrawerEntry item=item expanded_groups=expanded_groups /> })
                    .collect_view()}
            </nav>
            <DrawerFooter />
        </aside>
    }
}

#[component]
fn DrawerEntry(item: NavItem, expanded_groups: RwSignal<Vec<String>>) -> impl IntoView {
    if !item.is_group() {
        return view! { <DrawerLink item=item nested=false /> }.into_any();
    }

    let i18n = use_i18n();
    let key = StoredValue::new(item.key.clone());
    let label = item.label.clone();
    let is_expanded = move || key.with_value(|k| expanded_groups.with(|groups| groups.contains(k)));
    let toggle = move |_| {
        let gid = key.get_value();
        expanded_groups.update(move |groups| {
            if let Some(pos) = groups.iter().position(|g| g == &gid) {
                groups.remove(pos);
            } else {
                groups.push(gid);
            }
        });
    };
    let children = StoredValue::new(item.children);

    view! {
        <div class="app-sidebar__group" data-key=item.key>
            <div class="app-sidebar__item" on:click=toggle>
                <div class="app-sidebar__item-content">
                    {item.icon.as_deref().map(icon)}
                    <span>{move || label.resolve(|k| i18n.tr(k))}</span>
                </div>
                <div
                    class="app-sidebar__chevron"
                    class:app-sidebar__chevron--expanded=is_expanded
                >
                    {icon("chevron-right")}
                </div>
            </div>
            <Show when=is_expanded>
                <div class="app-sidebar__children">
                    {children
                        .get_value()
                        .into_iter()
                        .map(|child| view! { <DrawerLink item=child nested=true /> })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[component]
fn DrawerLink(item: NavItem, nested: bool) -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let href = StoredValue::new(item.href.clone());
    let label = item.label.clone();
    let is_active = move || href.with_value(|h| pathname.with(|p| p == h));

    view! {
        <div
            class="app-sidebar__item"
            class:app-sidebar__item--nested=nested
            class:app-sidebar__item--active=is_active
            data-key=item.key
            on:click=move |_| href.with_value(|h| navigate(h, Default::default()))
        >
            <div class="app-sidebar__item-content">
                {item.icon.as_deref().map(icon)}
                <span>{move || label.resolve(|k| i18n.tr(k))}</span>
            </div>
        </div>
    }
}

/// The reserved settings route, pinned under the navigation list.
#[component]
pub fn DrawerFooter() -> impl IntoView {
    let table = use_route_table();

    settings_entry(table.routes()).map(|item| {
        view! {
            <div class="app-sidebar__footer">
                <DrawerLink item=item nested=false />
            </div>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_within() {
        assert!(is_within("/media", "/media"));
        assert!(is_within("/media/videos", "/media"));
        assert!(!is_within("/mediathek", "/media"));
        assert!(!is_within("/", "/media"));
    }
}
