use folio_models::i18n::{ContactKey, Locale};

/// Resolves translation keys to display text for one locale.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait Translator: Send + Sync + 'static {
    fn locale(&self) -> Locale;

    fn translate(&self, key: ContactKey) -> String;
}

#[cfg(feature = "mock")]
impl MockTranslator {
    /// Translates every key to its namespaced form, e.g. `Contact.err_name_min`.
    pub fn with_keys(mut self, locale: Locale) -> Self {
        self.expect_locale().return_const(locale);
        self.expect_translate().returning(|key| key.to_string());
        self
    }
}
