//! Internationalization: Fluent catalogs plus a reactive locale.
//!
//! `I18n` is provided through context by `App`. Reading a translation inside
//! a reactive closure subscribes to the locale, so switching the language
//! re-renders every label.

mod catalog;

pub use catalog::{resolve_locale, Catalog, FALLBACK_LOCALE};
pub use fluent_bundle::FluentArgs;

use crate::shared::storage;
use leptos::prelude::*;
use std::sync::Arc;
use unic_langid::LanguageIdentifier;

const LOCALE_STORAGE_KEY: &str = "media-tracker-locale";

#[derive(Clone, Copy)]
pub struct I18n {
    catalog: StoredValue<Arc<Catalog>>,
    locale: RwSignal<LanguageIdentifier>,
}

impl I18n {
    pub fn new(catalog: Catalog, locale: LanguageIdentifier) -> Self {
        Self {
            catalog: StoredValue::new(Arc::new(catalog)),
            locale: RwSignal::new(locale),
        }
    }

    /// Embedded catalog with the locale resolved from the stored preference,
    /// the configured default and the browser language, in that order.
    pub fn bootstrap(configured: &str) -> Self {
        let catalog = Catalog::embedded();
        let stored = storage::get_item(LOCALE_STORAGE_KEY);
        let browser = web_sys::window().and_then(|w| w.navigator().language());
        let locale = resolve_locale(
            stored.as_deref(),
            Some(configured),
            browser.as_deref(),
            &catalog.locales(),
        )
        .unwrap_or_else(|| catalog.fallback().clone());
        log::info!("ui locale: {}", locale);
        Self::new(catalog, locale)
    }

    pub fn translate(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.locale
            .with(|locale| self.catalog.with_value(|c| c.translate(locale, key, args)))
    }

    pub fn tr(&self, key: &str) -> String {
        self.translate(key, None)
    }

    /// Reactive translation of `key`, for use directly in views.
    pub fn label(&self, key: &'static str) -> Signal<String> {
        let this = *self;
        Signal::derive(move || this.tr(key))
    }

    pub fn locale(&self) -> LanguageIdentifier {
        self.locale.get()
    }

    pub fn locale_untracked(&self) -> LanguageIdentifier {
        self.locale.get_untracked()
    }

    pub fn available_locales(&self) -> Vec<LanguageIdentifier> {
        self.catalog.with_value(|c| c.locales())
    }

    /// Switches the UI language and persists the choice. Unknown locales
    /// are ignored.
    pub fn set_locale(&self, locale: LanguageIdentifier) {
        if !self.catalog.with_value(|c| c.has_locale(&locale)) {
            log::warn!("locale {} has no catalog, ignored", locale);
            return;
        }
        storage::set_item(LOCALE_STORAGE_KEY, &locale.to_string());
        self.locale.set(locale);
    }
}

pub fn use_i18n() -> I18n {
    use_context::<I18n>().expect("I18n not provided in context")
}
