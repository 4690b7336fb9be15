use std::{collections::HashMap, sync::Arc};

use anyhow::Context;
use folio_i18n_contracts::Translator;
use folio_models::i18n::{ContactKey, Locale};
use tracing::warn;

const MESSAGES: &[(Locale, &str)] = &[
    (Locale::En, include_str!("../messages/en.json")),
    (Locale::Ar, include_str!("../messages/ar.json")),
    (Locale::Fr, include_str!("../messages/fr.json")),
];

type Namespaces = HashMap<String, HashMap<String, String>>;

/// Translator backed by the message catalogs embedded in this crate.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    locale: Locale,
    catalog: Arc<HashMap<String, String>>,
}

impl CatalogTranslator {
    pub fn new(locale: Locale) -> anyhow::Result<Self> {
        let source = MESSAGES
            .iter()
            .find_map(|&(l, source)| (l == locale).then_some(source))
            .with_context(|| format!("No message catalog for locale {locale}"))?;

        let mut namespaces = serde_json::from_str::<Namespaces>(source)
            .with_context(|| format!("Failed to parse message catalog for locale {locale}"))?;
        let catalog = namespaces.remove(ContactKey::NAMESPACE).with_context(|| {
            format!(
                "Message catalog for locale {locale} has no {:?} namespace",
                ContactKey::NAMESPACE
            )
        })?;

        Ok(Self {
            locale,
            catalog: catalog.into(),
        })
    }
}

impl Translator for CatalogTranslator {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn translate(&self, key: ContactKey) -> String {
        match self.catalog.get(key.as_str()) {
            Some(text) => text.clone(),
            None => {
                warn!(locale = %self.locale, %key, "missing translation");
                key.to_string()
            }
        }
    }
}
