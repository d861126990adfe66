// SPDX-License-Identifier: MPL-2.0
//! Fluent-backed copy lookup.
//!
//! All on-screen text is kept in one embedded `.ftl` bundle. The prototype
//! ships a single locale, so there is no runtime language switching.

use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Locale of the embedded copy.
pub const LOCALE: &str = "en-IN";

pub struct I18n {
    bundle: Option<FluentBundle<FluentResource>>,
    locale: LanguageIdentifier,
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("locale", &self.locale)
            .field("loaded", &self.bundle.is_some())
            .finish()
    }
}

impl Default for I18n {
    /// Loads the embedded bundle, or an empty one if it is malformed.
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::empty())
    }
}

impl I18n {
    /// Loads the embedded bundle for [`LOCALE`].
    pub fn new() -> Result<Self> {
        let locale = parse_locale()?;
        let filename = format!("{LOCALE}.ftl");
        let file = Asset::get(&filename)
            .ok_or_else(|| Error::I18n(format!("missing embedded bundle {filename}")))?;
        let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
        let bundle = build_bundle(locale.clone(), source)?;

        Ok(Self {
            bundle: Some(bundle),
            locale,
        })
    }

    /// Builds a lookup from an inline Fluent source.
    pub fn from_source(source: &str) -> Result<Self> {
        let locale = parse_locale()?;
        let bundle = build_bundle(locale.clone(), source.to_string())?;
        Ok(Self {
            bundle: Some(bundle),
            locale,
        })
    }

    /// A lookup with no messages; every key renders as missing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bundle: None,
            locale: LanguageIdentifier::default(),
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = &self.bundle {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.into_owned();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn parse_locale() -> Result<LanguageIdentifier> {
    LOCALE
        .parse::<LanguageIdentifier>()
        .map_err(|err| Error::I18n(err.to_string()))
}

fn build_bundle(
    locale: LanguageIdentifier,
    source: String,
) -> Result<FluentBundle<FluentResource>> {
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| Error::I18n(format!("{} parse error(s)", errors.len())))?;
    let mut bundle = FluentBundle::new(vec![locale]);
    // Amounts are spliced into sentences; bidi isolation marks would show up as glyphs.
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::I18n(format!("{} duplicate message(s)", errors.len())))?;
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_bundle_loads() {
        let i18n = I18n::new().expect("embedded bundle should parse");
        assert_eq!(i18n.current_locale().to_string(), LOCALE);
        assert_eq!(i18n.tr("frame-home-title"), "Home");
    }

    #[test]
    fn missing_key_is_marked() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn empty_lookup_marks_everything_missing() {
        let i18n = I18n::empty();
        assert_eq!(i18n.tr("frame-home-title"), "MISSING: frame-home-title");
    }

    #[test]
    fn arguments_are_substituted_without_isolation_marks() {
        let i18n = I18n::from_source("greeting = Hello, { $name }!").expect("valid source");
        assert_eq!(
            i18n.tr_with_args("greeting", &[("name", "Amit")]),
            "Hello, Amit!"
        );
    }

    #[test]
    fn missing_argument_falls_back_to_marker() {
        let i18n = I18n::from_source("greeting = Hello, { $name }!").expect("valid source");
        assert_eq!(i18n.tr("greeting"), "MISSING: greeting");
    }

    #[test]
    fn malformed_source_is_an_error() {
        let result = I18n::from_source("= no identifier");
        assert!(matches!(result, Err(Error::I18n(_))));
    }
}
