//! I18nState - Internationalization State

use crate::i18n::{Locale, t};

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Toggle between English and Spanish
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::En => Locale::Es,
            Locale::Es => Locale::En,
        };
    }

    /// Translate a key in the current locale
    pub fn t(&self, key: &str) -> String {
        t(self.locale, key)
    }
}
