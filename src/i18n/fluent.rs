// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish()
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        Self::with_os_locale(cli_lang, config, sys_locale::get_locale())
    }

    fn with_os_locale(
        cli_lang: Option<String>,
        config: &Config,
        os_locale: Option<String>,
    ) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(filename, count = errors.len(), "FTL file has parse errors");
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Years are wrapped in dashes; bidi isolation marks would show up as glyphs.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(filename, count = errors.len(), "FTL file has duplicate messages");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(cli_lang, config, os_locale, &available_locales)
            .unwrap_or_else(|| default_locale.clone());
        tracing::debug!(locale = %current_locale, "resolved UI locale");

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        for locale in [&self.current_locale, &self.default_locale] {
            let Some(bundle) = self.bundles.get(locale) else {
                continue;
            };
            let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
                continue;
            };
            let mut errors = vec![];
            let value = bundle.format_pattern(pattern, args, &mut errors);
            if errors.is_empty() {
                return value.to_string();
            }
        }
        tracing::debug!(key, locale = %self.current_locale, "missing translation");
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    os_locale: Option<String>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let supported = |raw: &str| {
        raw.parse::<LanguageIdentifier>()
            .ok()
            .and_then(|lang| match_available(&lang, available))
    };

    // 1. Check CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config.general.language.as_deref().and_then(supported) {
        return Some(lang);
    }

    // 3. Check OS locale
    os_locale.as_deref().and_then(supported)
}

/// Exact match first, then a locale sharing the same language subtag
/// (`fr-CA` picks `fr`, `en` picks `en-US`).
fn match_available(
    lang: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == lang)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == lang.language)
        })
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeneralConfig};
    use crate::domain::gallery::Catalog;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn test_resolve_locale_cli() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
        };
        let lang = resolve_locale(None, &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_cli_beats_config() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                ..GeneralConfig::default()
            },
        };
        let lang = resolve_locale(Some("en-US".to_string()), &config, None, &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_region_falls_back_to_language() {
        let config = Config::default();
        let lang = resolve_locale(Some("fr-CA".to_string()), &config, None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_os() {
        let config = Config::default();
        let lang = resolve_locale(None, &config, Some("fr-FR".to_string()), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_config_beats_os() {
        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                ..GeneralConfig::default()
            },
        };
        let lang = resolve_locale(None, &config, Some("fr".to_string()), &available());
        assert_eq!(lang, Some("en-US".parse().unwrap()));
    }

    #[test]
    fn test_resolve_locale_nothing_supported() {
        let config = Config::default();
        let lang = resolve_locale(
            Some("de".to_string()),
            &config,
            Some("ja-JP".to_string()),
            &available(),
        );
        assert_eq!(lang, None);
    }

    #[test]
    fn unsupported_language_falls_back_to_default_locale() {
        let i18n = I18n::with_os_locale(Some("de".to_string()), &Config::default(), None);
        assert_eq!(i18n.current_locale().to_string(), DEFAULT_LOCALE);
        assert_eq!(i18n.tr("gallery-next-button"), "Next");
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::default();
        assert!(i18n.available_locales.contains(&"en-US".parse().unwrap()));
        assert!(i18n.available_locales.contains(&"fr".parse().unwrap()));
    }

    #[test]
    fn every_key_resolves_in_every_locale() {
        let i18n = I18n::default();
        let ui_keys = [
            "window-title",
            "window-title-with-artwork",
            "gallery-previous-button",
            "gallery-next-button",
            "gallery-year-line",
            "error-asset-missing",
            "error-io",
            "error-config",
            "notification-config-load-error",
        ];
        for locale in &i18n.available_locales {
            let bundle = &i18n.bundles[locale];
            for artwork in Catalog::classic().iter() {
                assert!(bundle.has_message(artwork.title_key), "{locale}: {}", artwork.title_key);
                assert!(bundle.has_message(artwork.year_key), "{locale}: {}", artwork.year_key);
            }
            for key in ui_keys {
                assert!(bundle.has_message(key), "{locale}: {key}");
            }
        }
    }

    #[test]
    fn window_title_references_application_name() {
        let i18n = I18n::new(Some("fr".to_string()), &Config::default());
        let title =
            i18n.tr_with_args("window-title-with-artwork", &[("title", "La Joconde")]);
        assert_eq!(title, format!("La Joconde - {}", i18n.tr("window-title")));
    }

    #[test]
    fn tr_with_args_fills_placeables_without_isolation_marks() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let line = i18n.tr_with_args("gallery-year-line", &[("year", "1889")]);
        assert_eq!(line, "— 1889 —");
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn config_warning_key_is_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        assert_eq!(
            i18n.tr("notification-config-load-error"),
            "Settings could not be loaded; defaults are used."
        );
    }
}
