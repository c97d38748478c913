//! Tabs: per-page descriptors, a strip bound to a selection signal, and a
//! container that shows the panel whose id is selected.
//!
//! A page either renders a [`TabContainer`] inline or, through
//! [`use_sticky_tabs`], moves the strip into the sticky slot under the
//! toolbar and keeps only the panels in its own body.

mod sticky;

pub use sticky::{use_sticky_tabs, StickyTabs};

use crate::shared::i18n::use_i18n;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::{Tab, TabList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDescriptor {
    pub id: String,
    pub label_key: String,
    pub icon: Option<String>,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label_key: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label_key: label_key.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Tab selected on first render: the requested id as given, otherwise the
/// first descriptor, otherwise `""`.
pub fn initial_tab(tabs: &[TabDescriptor], requested: Option<&str>) -> String {
    match requested {
        Some(id) => id.to_string(),
        None => tabs.first().map(|t| t.id.clone()).unwrap_or_default(),
    }
}

/// Selection used by a container: the caller's signal, or a fresh one on
/// the first tab.
fn container_selection(
    tabs: &[TabDescriptor],
    selected: Option<RwSignal<String>>,
) -> RwSignal<String> {
    selected.unwrap_or_else(|| RwSignal::new(initial_tab(tabs, None)))
}

/// Index of the panel whose id equals `current`.
fn panel_index<'a>(ids: impl IntoIterator<Item = &'a str>, current: &str) -> Option<usize> {
    ids.into_iter().position(|id| id == current)
}

/// Tab strip with a two-way binding to `selected`.
#[component]
pub fn TabStrip(tabs: Vec<TabDescriptor>, selected: RwSignal<String>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <TabList selected_value=selected>
            {tabs
                .into_iter()
                .map(|tab| {
                    let label_key = tab.label_key.clone();
                    view! {
                        <Tab value=tab.id.clone()>
                            <span class="tab-strip__label">
                                {tab.icon.as_deref().map(icon)}
                                <span>{move || i18n.tr(&label_key)}</span>
                            </span>
                        </Tab>
                    }
                })
                .collect_view()}
        </TabList>
    }
}

/// Body of one tab, matched against the selection by `id`.
#[slot]
pub struct TabPanel {
    #[prop(into)]
    id: String,
    children: ChildrenFn,
}

/// Strip followed by the selected panel. Without `selected` the container
/// keeps its own selection, starting at the first tab. Panel contents are
/// rendered as-is.
#[component]
pub fn TabContainer(
    tabs: Vec<TabDescriptor>,
    #[prop(optional)] selected: Option<RwSignal<String>>,
    #[prop(optional)] tab_panel: Vec<TabPanel>,
    /// Render only the panels; the strip lives elsewhere (sticky slot).
    #[prop(optional)]
    hide_strip: bool,
) -> impl IntoView {
    let selected = container_selection(&tabs, selected);
    let panels = StoredValue::new(tab_panel);

    view! {
        <div class="tab-container">
            {(!hide_strip).then(|| view! { <TabStrip tabs=tabs selected=selected /> })}
            <div class="tab-container__body">
                {move || {
                    let current = selected.get();
                    panels.with_value(|panels| {
                        panel_index(panels.iter().map(|panel| panel.id.as_str()), &current)
                            .map(|index| (panels[index].children)())
                    })
                }}
            </div>
        </div>
    }
}
