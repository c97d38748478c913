//! Navigation context shared by the layout and the pages.
//!
//! Provided once by `App` and passed down through Leptos context. It owns
//! the two page-level cells (active tab, sticky slot) together with drawer
//! visibility, so a page never reaches for ambient globals.

use super::sticky_slot::{StickyClaim, StickySlot};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct NavContext {
    /// Id of the selected tab of the current page; `""` when no page owns it.
    pub active_tab: RwSignal<String>,
    pub sticky: StickySlot,
    pub drawer_open: RwSignal<bool>,
}

impl Default for NavContext {
    fn default() -> Self {
        Self::new()
    }
}

impl NavContext {
    pub fn new() -> Self {
        Self {
            active_tab: RwSignal::new(String::new()),
            sticky: StickySlot::new(),
            drawer_open: RwSignal::new(true),
        }
    }

    pub fn set_active_tab(&self, id: &str) {
        log::debug!("active tab: '{}'", id);
        self.active_tab.set(id.to_string());
    }

    pub fn reset_active_tab(&self) {
        self.active_tab.try_set(String::new());
    }

    pub fn active_tab(&self) -> String {
        self.active_tab.get()
    }

    #[must_use = "dropping the claim empties the slot immediately"]
    pub fn claim_sticky(
        &self,
        owner: impl Into<String>,
        full_bleed: bool,
        render: impl Fn() -> AnyView + Send + Sync + 'static,
    ) -> StickyClaim {
        self.sticky.claim(owner, full_bleed, render)
    }

    pub fn clear_sticky(&self) {
        self.sticky.clear();
    }

    pub fn toggle_drawer(&self) {
        self.drawer_open.update(|open| *open = !*open);
    }
}

pub fn use_nav_context() -> NavContext {
    use_context::<NavContext>().expect("NavContext not provided in context")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_last_write_wins() {
        let nav = NavContext::new();
        nav.set_active_tab("channels");
        nav.set_active_tab("videos");
        assert_eq!(nav.active_tab(), "videos");
        nav.reset_active_tab();
        assert_eq!(nav.active_tab(), "");
    }

    #[test]
    fn test_toggle_drawer() {
        let nav = NavContext::new();
        assert!(nav.drawer_open.get_untracked());
        nav.toggle_drawer();
        assert!(!nav.drawer_open.get_untracked());
    }
}
