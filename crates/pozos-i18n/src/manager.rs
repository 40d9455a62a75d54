//! Internationalization manager

use crate::bundle::{fluent_args, BundleManager};
use crate::error::{I18nError, I18nResult};
use crate::resource::load_resource;
use crate::Locale;
use fluent_bundle::FluentArgs;
use tracing::{debug, info, warn};

/// Resolves messages for one active locale, falling back to the default locale
#[derive(Debug)]
pub struct I18nManager {
    locale: Locale,
    default_locale: Locale,
    bundle_manager: BundleManager,
}

impl I18nManager {
    /// Create a manager for `locale` with the built-in catalogues loaded
    pub fn new(locale: Locale) -> I18nResult<Self> {
        let default_locale = Locale::default();
        let mut bundle_manager = BundleManager::new();

        bundle_manager.add_resource(locale, load_resource(locale)?)?;
        if locale != default_locale {
            bundle_manager.add_resource(default_locale, load_resource(default_locale)?)?;
        }

        info!("I18nManager initialized with locale: {}", locale);
        Ok(Self {
            locale,
            default_locale,
            bundle_manager,
        })
    }

    /// Create a manager from a locale code such as `es-MX`
    pub fn from_code(code: &str) -> I18nResult<Self> {
        Self::new(Locale::parse(code)?)
    }

    /// Active locale
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str, args: Option<&FluentArgs>) -> I18nResult<String> {
        if self.bundle_manager.has_message(self.locale, key) {
            return self.bundle_manager.format_message(self.locale, key, args);
        }

        if self.locale != self.default_locale
            && self.bundle_manager.has_message(self.default_locale, key)
        {
            warn!(
                "Message '{}' not found in locale {}, falling back to default locale {}",
                key, self.locale, self.default_locale
            );
            return self
                .bundle_manager
                .format_message(self.default_locale, key, args);
        }

        Err(I18nError::MessageNotFound {
            key: key.to_string(),
            locale: self.locale.code().to_string(),
        })
    }

    /// Get a localized message that takes the well name as `$well`
    pub fn get_well_message(&self, key: &str, well: &str) -> I18nResult<String> {
        debug!("Resolving '{}' for well {}", key, well);
        let args = fluent_args(&[("well", well)]);
        self.get_message(key, Some(&args))
    }
}
