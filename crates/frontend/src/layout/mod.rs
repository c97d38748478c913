pub mod drawer;
pub mod nav_context;
pub mod sticky_slot;
pub mod tabs;
mod toolbar;

pub use nav_context::{use_nav_context, NavContext};

use crate::shared::notify::Toaster;
use drawer::Drawer;
use leptos::prelude::*;
use sticky_slot::StickyRegion;
use toolbar::Toolbar;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |                Toolbar                   |
/// +------------------------------------------+
/// |        sticky bar (full bleed)           |
/// +----------+-------------------------------+
/// |  Drawer  |  sticky bar (content column)  |
/// |          |  page content (scrolls)       |
/// +----------+-------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Toolbar />
            <StickyRegion full_bleed=true />
            <div class="app-body">
                <Drawer />
                <div class="app-main">
                    <StickyRegion full_bleed=false />
                    <main class="app-content">{children()}</main>
                </div>
            </div>
            <Toaster />
        </div>
    }
}
