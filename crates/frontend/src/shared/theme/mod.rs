//! Light/dark theme, persisted in `localStorage` and applied as a
//! `data-theme` attribute on `<body>`.

use crate::shared::i18n::use_i18n;
use crate::shared::storage;
use leptos::prelude::*;
use thaw::Select;

const THEME_STORAGE_KEY: &str = "media-tracker-theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            Theme::Light => "theme-light",
            Theme::Dark => "theme-dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn all() -> [Theme; 2] {
        [Theme::Light, Theme::Dark]
    }
}

#[cfg(target_arch = "wasm32")]
fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    if let Some(body) = body {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme(_theme: Theme) {}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    /// Restores the stored theme (light when none) and applies it.
    pub fn bootstrap() -> Self {
        let theme = storage::get_item(THEME_STORAGE_KEY)
            .and_then(|s| Theme::parse(&s))
            .unwrap_or_default();
        apply_theme(theme);
        Self {
            theme: RwSignal::new(theme),
        }
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        storage::set_item(THEME_STORAGE_KEY, theme.as_str());
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        let next = match self.theme.get_untracked() {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        self.set_theme(next);
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not provided in context")
}

/// Theme picker for the settings page.
#[component]
pub fn ThemeSelect() -> impl IntoView {
    let ctx = use_theme();
    let i18n = use_i18n();
    let value = RwSignal::new(ctx.theme.get_untracked().as_str().to_string());

    Effect::new(move |_| {
        if let Some(theme) = Theme::parse(&value.get()) {
            if theme != ctx.theme.get_untracked() {
                ctx.set_theme(theme);
            }
        }
    });

    view! {
        <Select value=value>
            {Theme::all()
                .into_iter()
                .map(|theme| {
                    view! {
                        <option value=theme.as_str()>{move || i18n.tr(theme.label_key())}</option>
                    }
                })
                .collect_view()}
        </Select>
    }
}
