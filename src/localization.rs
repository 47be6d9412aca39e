//! Message lookup for labels and error texts shown by the host.

use std::collections::HashMap;

use error_stack::report;

use crate::{
    errors::{ConfigurationError, CustomResult},
    types::Locale,
};

const FALLBACK_LANGUAGE: &str = "en";

const CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.toml")),
    ("fr", include_str!("../locales/fr.toml")),
];

pub trait LocalizationService: Send + Sync {
    /// Message for `key` in `locale`; never fails, falling back to the
    /// default language and finally to the key itself.
    fn get_safe_localized_string(&self, key: &str, locale: &Locale) -> String;
}

/// Catalogs compiled into the connector.
#[derive(Debug, Clone)]
pub struct BundledLocalization {
    catalogs: HashMap<&'static str, HashMap<String, String>>,
}

impl BundledLocalization {
    pub fn new() -> CustomResult<Self, ConfigurationError> {
        let catalogs: HashMap<_, _> = CATALOGS
            .iter()
            .map(|(language, source)| {
                toml::from_str::<HashMap<String, String>>(source)
                    .map(|catalog| (*language, catalog))
                    .map_err(|err| {
                        report!(ConfigurationError::CatalogParsingFailed {
                            language: *language,
                        })
                        .attach_printable(err.to_string())
                    })
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { catalogs })
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&String> {
        self.catalogs
            .get(language)
            .and_then(|catalog| catalog.get(key))
    }
}

impl LocalizationService for BundledLocalization {
    fn get_safe_localized_string(&self, key: &str, locale: &Locale) -> String {
        self.lookup(&locale.language(), key)
            .or_else(|| self.lookup(FALLBACK_LANGUAGE, key))
            .cloned()
            .unwrap_or_else(|| {
                tracing::warn!(key, locale = ?locale, "missing localized message");
                key.to_string()
            })
    }
}
