//! i18n - Internationalization Module
//!
//! Translations live in `locales/*.yml` and are compiled in by `rust_i18n`.

use rust_i18n::t;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Spanish
    Es,
}

impl Locale {
    /// Locale code understood by `rust_i18n`
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
        }
    }

    /// Parse a code such as `es`, `es-MX` or `en_US`; anything unknown is English
    pub fn from_code(code: &str) -> Self {
        let lang = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match lang.as_str() {
            "es" => Locale::Es,
            _ => Locale::En,
        }
    }

    /// Locale of the current OS user
    pub fn detect() -> Self {
        Self::from_code(&locale_config::Locale::current().to_string())
    }
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> String {
    t!(key, locale = locale.code()).to_string()
}

/// Translation keys used outside of page code
pub mod keys {
    pub const PROFILE_FOLLOW: &str = "profile.follow";
    pub const PROFILE_FOLLOW_BACK: &str = "profile.follow_back";
    pub const PROFILE_FOLLOWING: &str = "profile.following";

    pub const TOAST_PROFILE_LOAD_FAILED: &str = "toast.profile_load_failed";
    pub const TOAST_FOLLOW_FAILED: &str = "toast.follow_failed";
    pub const TOAST_FOLLOWED: &str = "toast.followed";
    pub const TOAST_UNFOLLOWED: &str = "toast.unfollowed";
    pub const TOAST_REGISTERED: &str = "toast.registered";
    pub const TOAST_REGISTER_FAILED: &str = "toast.register_failed";
}
