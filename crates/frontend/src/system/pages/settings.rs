//! Settings page: UI language and theme.

use crate::shared::i18n::use_i18n;
use crate::shared::theme::ThemeSelect;
use leptos::prelude::*;
use thaw::*;
use unic_langid::LanguageIdentifier;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let i18n = use_i18n();
    let language = RwSignal::new(i18n.locale().to_string());

    Effect::new(move |_| {
        let wanted = language.get();
        match wanted.parse::<LanguageIdentifier>() {
            Ok(locale) if locale != i18n.locale_untracked() => i18n.set_locale(locale),
            Ok(_) => {}
            Err(e) => log::warn!("bad locale '{}': {}", wanted, e),
        }
    });

    let options = i18n
        .available_locales()
        .into_iter()
        .map(|locale| {
            let code = locale.to_string();
            let label = {
                let key = format!("language-{}", code);
                move || i18n.tr(&key)
            };
            view! { <option value=code>{label}</option> }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{i18n.label("nav-settings")}</h1>
            </div>
            <Flex vertical=true gap=FlexGap::Medium>
                <div class="form-group">
                    <Label>{i18n.label("settings-language")}</Label>
                    <Select value=language>{options}</Select>
                </div>
                <div class="form-group">
                    <Label>{i18n.label("settings-theme")}</Label>
                    <ThemeSelect />
                </div>
            </Flex>
        </div>
    }
}
