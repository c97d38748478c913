//! Sticky slot: a single region under the toolbar that the active page can
//! fill with auxiliary controls, typically its tab strip.
//!
//! Last writer wins. Each claim gets a generation number and hands back a
//! [`StickyClaim`] guard; dropping the guard empties the slot only while it
//! still holds that generation, so a page that releases late never wipes out
//! the bar of the page that replaced it.

use super::nav_context::use_nav_context;
use leptos::prelude::*;
use std::sync::Arc;

pub type StickyRender = Arc<dyn Fn() -> AnyView + Send + Sync>;

#[derive(Clone)]
pub struct StickyOccupant {
    /// Claimant tag, for logs.
    pub owner: String,
    /// Span the full width under the toolbar instead of the content column.
    pub full_bleed: bool,
    pub render: StickyRender,
    generation: u64,
}

impl std::fmt::Debug for StickyOccupant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StickyOccupant")
            .field("owner", &self.owner)
            .field("full_bleed", &self.full_bleed)
            .field("generation", &self.generation)
            .finish()
    }
}

#[derive(Clone, Copy)]
pub struct StickySlot {
    occupant: RwSignal<Option<StickyOccupant>>,
    generation: StoredValue<u64>,
}

impl Default for StickySlot {
    fn default() -> Self {
        Self::new()
    }
}

impl StickySlot {
    pub fn new() -> Self {
        Self {
            occupant: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    /// Installs `render`, replacing any previous occupant unconditionally.
    #[must_use = "dropping the claim empties the slot immediately"]
    pub fn claim(
        &self,
        owner: impl Into<String>,
        full_bleed: bool,
        render: impl Fn() -> AnyView + Send + Sync + 'static,
    ) -> StickyClaim {
        let owner = owner.into();
        self.generation.update_value(|g| *g += 1);
        let generation = self.generation.get_value();

        if let Some(previous) = self.occupant.with_untracked(|o| o.as_ref().map(|o| o.owner.clone())) {
            log::warn!("sticky slot: '{}' replaces '{}'", owner, previous);
        } else {
            log::debug!("sticky slot: claimed by '{}'", owner);
        }

        self.occupant.set(Some(StickyOccupant {
            owner,
            full_bleed,
            render: Arc::new(render),
            generation,
        }));
        StickyClaim {
            slot: *self,
            generation,
        }
    }

    /// Empties the slot. A no-op when nothing is installed.
    pub fn clear(&self) {
        if self.occupant.with_untracked(Option::is_some) {
            self.occupant.set(None);
        }
    }

    pub fn occupant(&self) -> Option<StickyOccupant> {
        self.occupant.get()
    }

    pub fn owner(&self) -> Option<String> {
        self.occupant
            .with_untracked(|o| o.as_ref().map(|o| o.owner.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.with_untracked(Option::is_none)
    }

    fn release(&self, generation: u64) {
        let current = self
            .occupant
            .try_with_untracked(|o| o.as_ref().map(|o| o.generation))
            .flatten();
        if current == Some(generation) {
            log::debug!("sticky slot: released generation {}", generation);
            self.occupant.try_set(None);
        }
    }
}

/// Guard returned by [`StickySlot::claim`]. Dropping it releases the claim.
pub struct StickyClaim {
    slot: StickySlot,
    generation: u64,
}

impl StickyClaim {
    /// `true` while the slot still shows this claim's occupant.
    pub fn is_current(&self) -> bool {
        self.slot
            .occupant
            .try_with_untracked(|o| o.as_ref().map(|o| o.generation))
            .flatten()
            == Some(self.generation)
    }

    pub fn release(self) {}
}

impl Drop for StickyClaim {
    fn drop(&mut self) {
        self.slot.release(self.generation);
    }
}

/// Renders the current occupant of the sticky slot, or nothing. The shell
/// places one region across the full width under the toolbar and one at the
/// top of the content column; each shows only occupants of its kind.
#[component]
pub fn StickyRegion(full_bleed: bool) -> impl IntoView {
    let nav = use_nav_context();

    move || {
        nav.sticky
            .occupant()
            .filter(|occupant| occupant.full_bleed == full_bleed)
            .map(|occupant| {
                view! {
                    <div
                        class="sticky-bar"
                        class:sticky-bar--full-bleed=full_bleed
                        data-owner=occupant.owner.clone()
                    >
                        {(occupant.render)()}
                    </div>
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank() -> AnyView {
        ().into_any()
    }

    #[test]
    fn test_second_claim_replaces_first() {
        let slot = StickySlot::new();
        let _first = slot.claim("first", false, blank);
        let _second = slot.claim("second", true, blank);
        let occupant = slot.occupant().unwrap();
        assert_eq!(occupant.owner, "second");
        assert!(occupant.full_bleed);
    }

    #[test]
    fn test_clear_empties_slot() {
        let slot = StickySlot::new();
        let _claim = slot.claim("page", false, blank);
        slot.clear();
        assert!(slot.is_empty());
        slot.clear();
        assert!(slot.is_empty());
    }

    #[test]
    fn test_dropping_claim_releases_slot() {
        let slot = StickySlot::new();
        let claim = slot.claim("page", false, blank);
        assert_eq!(slot.owner().as_deref(), Some("page"));
        claim.release();
        assert!(slot.is_empty());
    }

    #[test]
    fn test_stale_claim_does_not_clear_newer_occupant() {
        let slot = StickySlot::new();
        let old = slot.claim("old", false, blank);
        let _new = slot.claim("new", false, blank);
        assert!(!old.is_current());
        drop(old);
        assert_eq!(slot.owner().as_deref(), Some("new"));
    }
}
