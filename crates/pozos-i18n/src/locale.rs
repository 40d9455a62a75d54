//! Locale management and utilities

use crate::error::{I18nError, I18nResult};
use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

/// Supported locales
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Mexican Spanish, the report's native language
    #[default]
    SpanishMexico,
    English,
}

impl Locale {
    /// Get the language code for this locale
    pub fn code(&self) -> &'static str {
        match self {
            Self::SpanishMexico => "es-MX",
            Self::English => "en-US",
        }
    }

    /// Get the short language code for this locale
    pub fn short_code(&self) -> &'static str {
        match self {
            Self::SpanishMexico => "es",
            Self::English => "en",
        }
    }

    /// Parse a locale from a language code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" | "es-MX" => Some(Self::SpanishMexico),
            "en" | "en-US" => Some(Self::English),
            _ => None,
        }
    }

    /// Parse a locale, failing for codes without a catalogue
    pub fn parse(code: &str) -> I18nResult<Self> {
        Self::from_code(code).ok_or_else(|| I18nError::UnsupportedLocale(code.to_string()))
    }

    /// Convert to Fluent LanguageIdentifier
    pub fn to_language_identifier(&self) -> I18nResult<LanguageIdentifier> {
        self.code()
            .parse()
            .map_err(|_| I18nError::InvalidLanguageId(self.code().to_string()))
    }

    /// Get all supported locales
    pub fn all() -> Vec<Self> {
        vec![Self::SpanishMexico, Self::English]
    }

    /// Get the display name for this locale
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SpanishMexico => "Español (México)",
            Self::English => "English",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_mexican_spanish() {
        assert_eq!(Locale::default(), Locale::SpanishMexico);
        assert_eq!(Locale::default().code(), "es-MX");
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("es"), Some(Locale::SpanishMexico));
        assert_eq!(Locale::from_code("en-US"), Some(Locale::English));
        assert_eq!(Locale::from_code("fr-FR"), None);
    }

    #[test]
    fn test_parse_unsupported() {
        let err = Locale::parse("de-DE").unwrap_err();
        assert!(matches!(err, I18nError::UnsupportedLocale(code) if code == "de-DE"));
    }

    #[test]
    fn test_language_identifiers() {
        for locale in Locale::all() {
            let id = locale.to_language_identifier().unwrap();
            assert_eq!(id.to_string(), locale.code());
        }
    }
}
