//! Tab strip hosted in the sticky slot for the lifetime of a page.

use super::{initial_tab, TabDescriptor, TabStrip};
use crate::layout::nav_context::{use_nav_context, NavContext};
use crate::layout::sticky_slot::StickyClaim;
use leptos::prelude::*;

/// A page's hold on the sticky slot and the active-tab cell. Dropping it
/// releases the slot and resets the active tab to `""`, unless another page
/// has claimed the slot in the meantime.
pub struct StickyTabs {
    nav: NavContext,
    claim: Option<StickyClaim>,
}

impl StickyTabs {
    pub fn open(
        nav: NavContext,
        owner: &str,
        tabs: Vec<TabDescriptor>,
        requested: Option<&str>,
        full_bleed: bool,
    ) -> Self {
        nav.set_active_tab(&initial_tab(&tabs, requested));
        let selected = nav.active_tab;
        let claim = nav.claim_sticky(owner, full_bleed, move || {
            view! { <TabStrip tabs=tabs.clone() selected=selected /> }.into_any()
        });
        Self {
            nav,
            claim: Some(claim),
        }
    }

    pub fn selected(&self) -> RwSignal<String> {
        self.nav.active_tab
    }

    /// Selects `id` after the page was opened, e.g. when the location moves
    /// to another tab's route. Ignored once another page holds the slot.
    pub fn request(&self, id: &str) {
        let current = self.claim.as_ref().is_some_and(StickyClaim::is_current);
        if current && self.nav.active_tab.with_untracked(|tab| tab != id) {
            self.nav.set_active_tab(id);
        }
    }
}

impl Drop for StickyTabs {
    fn drop(&mut self) {
        if let Some(claim) = self.claim.take() {
            let current = claim.is_current();
            claim.release();
            if current {
                self.nav.reset_active_tab();
            }
        }
    }
}

/// Puts a tab strip for `tabs` into the sticky slot until the calling
/// component is unmounted. Each later `Some` from `requested` selects that
/// tab again. Returns the shared active-tab signal.
pub fn use_sticky_tabs(
    owner: &str,
    tabs: Vec<TabDescriptor>,
    requested: Signal<Option<String>>,
) -> RwSignal<String> {
    let initial = requested.get_untracked();
    let session = StickyTabs::open(use_nav_context(), owner, tabs, initial.as_deref(), true);
    let selected = session.selected();
    let session = StoredValue::new(Some(session));

    Effect::new(move |_| {
        if let Some(id) = requested.get() {
            session.try_with_value(|s| {
                if let Some(s) = s {
                    s.request(&id);
                }
            });
        }
    });
    on_cleanup(move || {
        session.try_update_value(|s| s.take());
    });
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Vec<TabDescriptor> {
        vec![
            TabDescriptor::new("channels", "tab-channels"),
            TabDescriptor::new("videos", "tab-videos"),
        ]
    }

    #[test]
    fn test_open_sets_tab_and_claims_slot() {
        let nav = NavContext::new();
        let session = StickyTabs::open(nav, "media", tabs(), Some("videos"), true);
        assert_eq!(session.selected().get_untracked(), "videos");
        let occupant = nav.sticky.occupant().unwrap();
        assert_eq!(occupant.owner, "media");
        assert!(occupant.full_bleed);
    }

    #[test]
    fn test_unmount_leaves_slot_empty_and_tab_reset() {
        let nav = NavContext::new();
        let session = StickyTabs::open(nav, "media", tabs(), None, true);
        assert_eq!(nav.active_tab(), "channels");
        drop(session);
        assert!(nav.sticky.is_empty());
        assert_eq!(nav.active_tab(), "");
    }

    #[test]
    fn test_later_request_reselects_tab() {
        let nav = NavContext::new();
        let session = StickyTabs::open(nav, "media", tabs(), Some("channels"), true);
        nav.set_active_tab("videos");

        session.request("channels");
        assert_eq!(nav.active_tab(), "channels");
        session.request("videos");
        assert_eq!(session.selected().get_untracked(), "videos");
    }

    #[test]
    fn test_request_ignored_after_slot_taken_over() {
        let nav = NavContext::new();
        let old = StickyTabs::open(nav, "old", tabs(), None, true);
        let _new = StickyTabs::open(nav, "new", tabs(), Some("videos"), true);
        old.request("channels");
        assert_eq!(nav.active_tab(), "videos");
    }

    #[test]
    fn test_late_unmount_keeps_newer_claim() {
        let nav = NavContext::new();
        let old = StickyTabs::open(nav, "old", tabs(), None, false);
        let _new = StickyTabs::open(nav, "new", tabs(), Some("videos"), false);
        drop(old);
        assert_eq!(nav.sticky.owner().as_deref(), Some("new"));
        assert_eq!(nav.active_tab(), "videos");
    }
}
