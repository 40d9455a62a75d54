//! FluentBundle management and message formatting

use crate::error::{I18nError, I18nResult};
use crate::Locale;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::collections::HashMap;
use tracing::{debug, error, warn};

/// Manages one FluentBundle per locale
pub struct BundleManager {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for BundleManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BundleManager")
            .field("locales", &self.bundles.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for BundleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BundleManager {
    /// Create a new BundleManager
    pub fn new() -> Self {
        Self {
            bundles: HashMap::new(),
        }
    }

    /// Add a resource to a locale's bundle
    pub fn add_resource(&mut self, locale: Locale, resource: FluentResource) -> I18nResult<()> {
        let lang_id = locale.to_language_identifier()?;

        let bundle = self.bundles.entry(locale).or_insert_with(|| {
            let mut bundle = FluentBundle::new(vec![lang_id]);
            // Unicode isolation marks would end up drawn into the PNGs
            bundle.set_use_isolating(false);
            bundle
        });

        bundle.add_resource(resource).map_err(|errors| {
            let error_messages: Vec<String> =
                errors.into_iter().map(|e| format!("{:?}", e)).collect();

            error!("Failed to add resource to bundle: {:?}", error_messages);

            I18nError::FluentParseError {
                locale: locale.code().to_string(),
                errors: error_messages,
            }
        })?;

        debug!("Added resource to bundle for locale: {}", locale);
        Ok(())
    }

    /// Format a message with the given arguments
    pub fn format_message(
        &self,
        locale: Locale,
        message_id: &str,
        args: Option<&FluentArgs>,
    ) -> I18nResult<String> {
        let not_found = || I18nError::MessageNotFound {
            key: message_id.to_string(),
            locale: locale.code().to_string(),
        };

        let bundle = self.bundles.get(&locale).ok_or_else(not_found)?;
        let message = bundle.get_message(message_id).ok_or_else(not_found)?;
        let pattern = message.value().ok_or_else(not_found)?;

        let mut errors = Vec::new();
        let formatted = bundle.format_pattern(pattern, args, &mut errors);

        if !errors.is_empty() {
            let error_messages: Vec<String> =
                errors.into_iter().map(|e| format!("{:?}", e)).collect();

            warn!("Formatting errors for message '{}': {:?}", message_id, error_messages);

            return Err(I18nError::MessageFormatError {
                key: message_id.to_string(),
                errors: error_messages,
            });
        }

        Ok(formatted.into_owned())
    }

    /// Check if a message exists in the bundle
    pub fn has_message(&self, locale: Locale, message_id: &str) -> bool {
        self.bundles
            .get(&locale)
            .map(|bundle| bundle.has_message(message_id))
            .unwrap_or(false)
    }

    /// Get all available locales
    pub fn available_locales(&self) -> Vec<Locale> {
        self.bundles.keys().copied().collect()
    }
}

/// Build FluentArgs from name/value pairs
pub fn fluent_args<'a>(pairs: &[(&'a str, &'a str)]) -> FluentArgs<'a> {
    let mut args = FluentArgs::new();
    for (name, value) in pairs {
        args.set(*name, *value);
    }
    args
}
