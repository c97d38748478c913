//! Top bar: drawer toggle, application title and the current page title.

use crate::layout::drawer::NavLabel;
use crate::layout::nav_context::use_nav_context;
use crate::routes::use_route_table;
use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use crate::shared::theme::use_theme;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Toolbar() -> impl IntoView {
    let nav = use_nav_context();
    let table = use_route_table();
    let theme = use_theme();
    let i18n = use_i18n();
    let pathname = use_location().pathname;

    let app_title = move || i18n.tr("app-title");
    let toggle_title = move || i18n.tr("toolbar-toggle-drawer");
    let page_title = move || {
        pathname.with(|path| {
            table
                .resolve(path)
                .map(|resolved| NavLabel::for_route(resolved.node).resolve(|k| i18n.tr(k)))
        })
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| nav.toggle_drawer()
                    title=toggle_title
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{app_title}</span>
                {move || page_title().map(|title| view! {
                    <span class="top-header__separator">{icon("chevron-right")}</span>
                    <span class="top-header__page">{title}</span>
                })}
            </div>
            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| theme.toggle()
                    data-theme=move || theme.theme.get().as_str()
                >
                    {icon("settings")}
                </button>
            </div>
        </header>
    }
}
