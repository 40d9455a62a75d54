//! Error types for internationalization operations

use pozos_common::PozosError;
use thiserror::Error;

/// Errors that can occur during internationalization operations
#[derive(Error, Debug)]
pub enum I18nError {
    /// Failed to parse a language identifier
    #[error("Invalid language identifier: {0}")]
    InvalidLanguageId(String),

    /// No catalogue ships for the requested locale
    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    /// Failed to parse or register a Fluent resource
    #[error("Failed to parse Fluent resource for {locale}: {errors:?}")]
    FluentParseError { locale: String, errors: Vec<String> },

    /// Message not found in any bundle
    #[error("Message not found: {key} ({locale})")]
    MessageNotFound { key: String, locale: String },

    /// Failed to format a message
    #[error("Failed to format message '{key}': {errors:?}")]
    MessageFormatError { key: String, errors: Vec<String> },
}

impl I18nError {
    /// Locale the error refers to, when known
    pub fn locale(&self) -> Option<&str> {
        match self {
            Self::UnsupportedLocale(locale) | Self::InvalidLanguageId(locale) => Some(locale),
            Self::FluentParseError { locale, .. } | Self::MessageNotFound { locale, .. } => {
                Some(locale)
            }
            Self::MessageFormatError { .. } => None,
        }
    }
}

impl From<I18nError> for PozosError {
    fn from(err: I18nError) -> Self {
        match err.locale() {
            Some(locale) => PozosError::localization_with_locale(err.to_string(), locale),
            None => PozosError::localization(err.to_string()),
        }
    }
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;
