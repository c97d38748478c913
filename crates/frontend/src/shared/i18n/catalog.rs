use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource};
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

/// FTL sources compiled into the binary, keyed by locale.
const EMBEDDED: &[(&str, &str)] = &[
    ("en-US", include_str!("../../../locales/en-US.ftl")),
    ("ru-RU", include_str!("../../../locales/ru-RU.ftl")),
];

pub const FALLBACK_LOCALE: &str = "en-US";

/// All message bundles of the application.
///
/// Lookups go to the requested locale first, then to the fallback locale;
/// a key missing everywhere is returned as-is.
pub struct Catalog {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    fallback: LanguageIdentifier,
}

impl Catalog {
    pub fn embedded() -> Self {
        Self::from_sources(EMBEDDED, FALLBACK_LOCALE)
    }

    /// Builds bundles from `(locale, ftl source)` pairs. Parse errors are
    /// logged; the messages that did parse remain usable.
    pub fn from_sources(sources: &[(&str, &str)], fallback: &str) -> Self {
        let mut bundles = HashMap::new();
        for (locale_str, source) in sources {
            let locale: LanguageIdentifier = match locale_str.parse() {
                Ok(locale) => locale,
                Err(e) => {
                    log::error!("skipping catalog '{}': {}", locale_str, e);
                    continue;
                }
            };
            let resource = match FluentResource::try_new(source.to_string()) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    log::error!("{} errors while parsing '{}'", errors.len(), locale_str);
                    resource
                }
            };
            let mut bundle = FluentBundle::new_concurrent(vec![locale.clone()]);
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                log::warn!("'{}': {:?}", locale_str, errors);
            }
            bundles.insert(locale, bundle);
        }

        let fallback = fallback
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        Self { bundles, fallback }
    }

    /// Available locales, sorted for stable display.
    pub fn locales(&self) -> Vec<LanguageIdentifier> {
        let mut locales: Vec<_> = self.bundles.keys().cloned().collect();
        locales.sort_by_key(|l| l.to_string());
        locales
    }

    pub fn fallback(&self) -> &LanguageIdentifier {
        &self.fallback
    }

    pub fn has_locale(&self, locale: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(locale)
    }

    pub fn translate(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> String {
        self.lookup(locale, key, args)
            .or_else(|| {
                (locale != &self.fallback)
                    .then(|| self.lookup(&self.fallback, key, args))
                    .flatten()
            })
            .unwrap_or_else(|| {
                log::warn!("missing translation '{}' for {}", key, locale);
                key.to_string()
            })
    }

    fn lookup(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            log::warn!("formatting '{}' for {}: {:?}", key, locale, errors);
        }
        Some(value.into_owned())
    }
}

/// Picks the UI locale: stored preference, then configured default, then the
/// browser language. A bare language (`ru`) matches the first available
/// locale with that language.
pub fn resolve_locale(
    stored: Option<&str>,
    configured: Option<&str>,
    browser: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [stored, configured, browser]
        .into_iter()
        .flatten()
        .find_map(|candidate| match_locale(candidate, available))
}

fn match_locale(candidate: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    let wanted: LanguageIdentifier = candidate.parse().ok()?;
    available
        .iter()
        .find(|l| **l == wanted)
        .or_else(|| available.iter().find(|l| l.language == wanted.language))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(s: &str) -> LanguageIdentifier {
        s.parse().unwrap()
    }

    #[test]
    fn test_embedded_catalog_translates_both_locales() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.locales(), vec![lang("en-US"), lang("ru-RU")]);
        assert_eq!(catalog.translate(&lang("en-US"), "nav-home", None), "Home");
        assert_eq!(catalog.translate(&lang("ru-RU"), "nav-home", None), "Главная");
    }

    #[test]
    fn test_missing_key_returns_key() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.translate(&lang("en-US"), "no-such-key", None), "no-such-key");
    }

    #[test]
    fn test_missing_message_falls_back_to_default_locale() {
        let catalog = Catalog::from_sources(
            &[("en-US", "only-en = English only\n"), ("ru-RU", "other = x\n")],
            "en-US",
        );
        assert_eq!(catalog.translate(&lang("ru-RU"), "only-en", None), "English only");
    }

    #[test]
    fn test_arguments_interpolate() {
        let catalog = Catalog::embedded();
        let mut args = FluentArgs::new();
        args.set("entity", "Channel");
        args.set("status", 500);
        assert_eq!(
            catalog.translate(&lang("en-US"), "toast-save-failed", Some(&args)),
            "Could not save Channel (status 500)"
        );

        let mut count = FluentArgs::new();
        count.set("count", 1);
        assert_eq!(catalog.translate(&lang("en-US"), "list-count", Some(&count)), "1 item");
    }

    #[test]
    fn test_broken_source_keeps_parsed_messages() {
        let catalog = Catalog::from_sources(&[("en-US", "good = fine\nbad = {\n")], "en-US");
        assert_eq!(catalog.translate(&lang("en-US"), "good", None), "fine");
    }

    #[test]
    fn test_resolve_locale_order() {
        let available = vec![lang("en-US"), lang("ru-RU")];
        assert_eq!(
            resolve_locale(Some("ru-RU"), Some("en-US"), None, &available),
            Some(lang("ru-RU"))
        );
        assert_eq!(
            resolve_locale(Some("de-DE"), Some("en-US"), Some("ru"), &available),
            Some(lang("en-US"))
        );
        assert_eq!(resolve_locale(None, None, Some("ru"), &available), Some(lang("ru-RU")));
        assert_eq!(resolve_locale(None, None, Some("fr-FR"), &available), None);
    }
}
